//! Pairwise verification of an expected tree against a built tree.

use serde::Serialize;
use tracing::{debug, info};

use sitecheck_diff::compare_html;

use crate::config::VerifyConfig;
use crate::error::{VerifyError, VerifyResult};
use crate::source::FileSource;

/// Summary of a passing run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    /// Files checked with the path-aware HTML comparison.
    pub html_files: usize,
    /// Files checked for exact equality.
    pub other_files: usize,
}

impl VerifyReport {
    pub fn total(&self) -> usize {
        self.html_files + self.other_files
    }
}

/// Verify that `actual` matches `expected`.
///
/// The file lists must have the same length and pair up path for path. Each
/// pair is then compared in listing order and the first failure ends the
/// run.
pub fn verify_trees(
    expected: &dyn FileSource,
    actual: &dyn FileSource,
    config: &VerifyConfig,
) -> VerifyResult<VerifyReport> {
    let expected_paths = expected.list_files()?;
    let actual_paths = actual.list_files()?;

    if expected_paths.len() != actual_paths.len() {
        return Err(VerifyError::TreeSizeMismatch {
            expected: expected_paths.len(),
            actual: actual_paths.len(),
        });
    }

    let mut report = VerifyReport::default();
    for (expected_path, actual_path) in expected_paths.iter().zip(&actual_paths) {
        if expected_path != actual_path {
            return Err(VerifyError::TreePathMismatch {
                expected: expected_path.clone(),
                actual: actual_path.clone(),
            });
        }

        let expected_bytes = expected.read_file(expected_path)?;
        let actual_bytes = actual.read_file(actual_path)?;

        if config.is_html(actual_path) {
            let expected_html = as_utf8(expected, expected_path, &expected_bytes)?;
            let actual_html = as_utf8(actual, actual_path, &actual_bytes)?;
            compare_html(expected_html, actual_html).map_err(|source| VerifyError::Html {
                path: actual_path.clone(),
                source,
            })?;
            report.html_files += 1;
        } else {
            if expected_bytes != actual_bytes {
                return Err(VerifyError::ContentMismatch {
                    expected: expected.display_path(expected_path),
                    actual: actual.display_path(actual_path),
                });
            }
            report.other_files += 1;
        }
        debug!(path = %actual_path, "file matches");
    }

    info!(
        html = report.html_files,
        other = report.other_files,
        "build output matches"
    );
    Ok(report)
}

fn as_utf8<'a>(
    source: &dyn FileSource,
    relative_path: &str,
    bytes: &'a [u8],
) -> VerifyResult<&'a str> {
    std::str::from_utf8(bytes).map_err(|_| VerifyError::InvalidUtf8(source.display_path(relative_path)))
}
