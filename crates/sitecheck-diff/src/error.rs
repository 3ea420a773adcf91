//! Error types for the HTML diff crate.

/// A disallowed difference found while comparing two HTML documents.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HtmlDiffError {
    /// A changed segment that is not inside a `src`/`href` value.
    #[error("DIFF outside path!: {0}")]
    OutsidePath(String),

    /// A changed segment inside a `src`/`href` value that is not a lone
    /// path separator.
    #[error("DIFF in path!: {0}")]
    InsidePath(String),
}

impl HtmlDiffError {
    /// The text of the offending segment.
    pub fn segment(&self) -> &str {
        match self {
            Self::OutsidePath(text) | Self::InsidePath(text) => text,
        }
    }
}

/// Convenience alias for HTML diff results.
pub type HtmlDiffResult<T> = Result<T, HtmlDiffError>;
