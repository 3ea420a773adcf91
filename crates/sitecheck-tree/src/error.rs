//! Error types for the tree verification crate.

use std::path::PathBuf;

use sitecheck_diff::HtmlDiffError;

/// Errors that end a verification run.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The two trees hold a different number of files.
    #[error("unequal number of files: expected {expected}, actual {actual}")]
    TreeSizeMismatch { expected: usize, actual: usize },

    /// The trees' file lists are not aligned.
    #[error("different files built: expected {expected}, actual {actual}")]
    TreePathMismatch { expected: String, actual: String },

    /// A non-HTML file's contents differ.
    #[error("{expected} and {actual} are not equal")]
    ContentMismatch { expected: String, actual: String },

    /// An HTML file differs outside the tolerated path separators.
    #[error("{path}: {source}")]
    Html {
        path: String,
        #[source]
        source: HtmlDiffError,
    },

    /// An HTML file is not valid UTF-8.
    #[error("{0} is not valid UTF-8")]
    InvalidUtf8(String),

    /// Reading a file failed.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking a directory tree failed.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl VerifyError {
    /// A stable, machine-readable name for the failure category.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TreeSizeMismatch { .. } => "tree_size_mismatch",
            Self::TreePathMismatch { .. } => "tree_path_mismatch",
            Self::ContentMismatch { .. } => "content_mismatch",
            Self::Html {
                source: HtmlDiffError::OutsidePath(_),
                ..
            } => "diff_outside_path",
            Self::Html {
                source: HtmlDiffError::InsidePath(_),
                ..
            } => "diff_inside_path",
            Self::InvalidUtf8(_) => "invalid_utf8",
            Self::Io { .. } => "io",
            Self::Walk(_) => "walk",
            Self::Config(_) => "config",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for verification results.
pub type VerifyResult<T> = Result<T, VerifyError>;
