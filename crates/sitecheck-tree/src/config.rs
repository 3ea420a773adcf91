use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{VerifyError, VerifyResult};

/// Configuration for a verification run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Root of the tree holding the expected output.
    pub expected_root: PathBuf,
    /// Root of the tree the site generator actually built.
    pub actual_root: PathBuf,
    /// File extensions (without the dot) routed to the HTML comparison.
    /// Matching is exact and case-sensitive.
    pub html_extensions: Vec<String>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            expected_root: PathBuf::from("../expected"),
            actual_root: PathBuf::from("../_site"),
            html_extensions: vec!["html".to_string()],
        }
    }
}

impl VerifyConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> VerifyResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> VerifyResult<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| VerifyError::io(path, e))?;
        Self::from_toml_str(&contents)
    }

    /// Whether a relative path is checked with the HTML comparison.
    pub fn is_html(&self, relative_path: &str) -> bool {
        Path::new(relative_path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.html_extensions.iter().any(|h| h == ext))
    }
}
