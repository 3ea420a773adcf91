//! Path-aware HTML comparison.
//!
//! Walks the character diff of two documents segment by segment, tracking
//! whether the scan is inside an open `src="` / `href="` value. Inside such
//! a value a changed segment is accepted only if it is a lone `/` or `\`;
//! everywhere else any change is rejected.

use tracing::trace;

use crate::error::{HtmlDiffError, HtmlDiffResult};
use crate::lexical::{
    ends_with_opening_tag, ends_with_unclosed_path, is_path_separator, starts_with_closed_path,
};
use crate::segment::{diff_chars, DiffSegment};

/// Tracks whether the scan is positioned inside an unclosed path value.
///
/// One tracker covers exactly one document pair and must not be reused.
#[derive(Clone, Debug, Default)]
pub struct PathTracker {
    inside_path: bool,
}

impl PathTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last observed segment left the scan inside a path value.
    pub fn inside_path(&self) -> bool {
        self.inside_path
    }

    /// Feed the next segment in order.
    ///
    /// The close check uses the state carried from the previous segment and
    /// runs before the open check; both run on every segment, so one segment
    /// can close a path and open the next.
    pub fn observe(&mut self, segment: &DiffSegment) -> HtmlDiffResult<()> {
        let text = segment.text.as_str();

        if self.inside_path && starts_with_closed_path(text) {
            trace!(segment = text, "left path value");
            self.inside_path = false;
        }

        if ends_with_unclosed_path(text) && ends_with_opening_tag(text) {
            trace!(segment = text, "entered path value");
            self.inside_path = true;
        }

        if !segment.is_diff() {
            return Ok(());
        }
        if !self.inside_path {
            return Err(HtmlDiffError::OutsidePath(segment.text.clone()));
        }
        if !is_path_separator(text) {
            return Err(HtmlDiffError::InsidePath(segment.text.clone()));
        }
        Ok(())
    }
}

/// Run the path-aware check over an ordered segment sequence.
///
/// Stops at the first disallowed segment.
pub fn compare_segments<'a, I>(segments: I) -> HtmlDiffResult<()>
where
    I: IntoIterator<Item = &'a DiffSegment>,
{
    let mut tracker = PathTracker::new();
    for segment in segments {
        tracker.observe(segment)?;
    }
    Ok(())
}

/// Compare two HTML documents, tolerating only path-separator differences
/// inside `src` and `href` values.
///
/// # Examples
///
/// ```
/// use sitecheck_diff::{compare_html, HtmlDiffError};
///
/// assert!(compare_html(r#"<img src="a/b.jpg">"#, r#"<img src="a\b.jpg">"#).is_ok());
/// assert!(matches!(
///     compare_html("<p>Hello</p>", "<p>Hi</p>"),
///     Err(HtmlDiffError::OutsidePath(_))
/// ));
/// ```
pub fn compare_html(expected: &str, actual: &str) -> HtmlDiffResult<()> {
    if expected == actual {
        return Ok(());
    }
    let segments = diff_chars(expected, actual);
    compare_segments(&segments)
}
