//! The [`FileSource`] trait and its filesystem and in-memory backends.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{VerifyError, VerifyResult};

/// A tree of files addressed by `/`-separated relative paths.
pub trait FileSource {
    /// All file paths in the tree, relative to its root, in a deterministic
    /// order. Directories are not listed.
    fn list_files(&self) -> VerifyResult<Vec<String>>;

    /// Raw contents of one file.
    fn read_file(&self, relative_path: &str) -> VerifyResult<Vec<u8>>;

    /// Human-readable location of a file, used in error messages.
    fn display_path(&self, relative_path: &str) -> String;
}

/// A directory on disk.
///
/// Files are listed depth-first with each directory's entries sorted by
/// file name.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSource for DirSource {
    fn list_files(&self) -> VerifyResult<Vec<String>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            files.push(to_slash_path(relative));
        }
        debug!(root = %self.root.display(), count = files.len(), "listed files");
        Ok(files)
    }

    fn read_file(&self, relative_path: &str) -> VerifyResult<Vec<u8>> {
        let path = self.root.join(relative_path);
        std::fs::read(&path).map_err(|e| VerifyError::io(path, e))
    }

    fn display_path(&self, relative_path: &str) -> String {
        self.root.join(relative_path).display().to_string()
    }
}

fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// An in-memory tree for tests and embedding.
///
/// Files are listed in key order.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    name: String,
    files: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
    /// Create an empty tree; `name` prefixes paths in error messages.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: BTreeMap::new(),
        }
    }

    /// Add or replace a file.
    pub fn insert(&mut self, relative_path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.files.insert(relative_path.into(), contents.into());
    }

    /// Builder form of [`MemorySource::insert`].
    pub fn with_file(
        mut self,
        relative_path: impl Into<String>,
        contents: impl Into<Vec<u8>>,
    ) -> Self {
        self.insert(relative_path, contents);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileSource for MemorySource {
    fn list_files(&self) -> VerifyResult<Vec<String>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn read_file(&self, relative_path: &str) -> VerifyResult<Vec<u8>> {
        self.files.get(relative_path).cloned().ok_or_else(|| {
            VerifyError::io(
                self.display_path(relative_path),
                std::io::Error::from(std::io::ErrorKind::NotFound),
            )
        })
    }

    fn display_path(&self, relative_path: &str) -> String {
        format!("{}/{}", self.name, relative_path)
    }
}
