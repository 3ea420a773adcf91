//! Path-aware HTML diff for sitecheck.
//!
//! Compares an expected HTML document with an actually-built one and accepts
//! only one kind of difference: a `/` swapped for a `\` (or the reverse)
//! inside the value of a `src="..."` or `href="..."` attribute. Anything else
//! is a build regression.
//!
//! No HTML parser is involved. Whether the scan is positioned inside a path
//! attribute is decided from quotes and angle brackets around each diff
//! segment.
//!
//! # Key Types
//!
//! - [`DiffSegment`] / [`SegmentKind`] -- Character-level diff runs
//! - [`PathTracker`] -- Per-document "inside a path value" state machine
//! - [`HtmlDiffError`] -- Classified failure (outside path / inside path)

pub mod error;
pub mod html;
pub mod lexical;
pub mod segment;

pub use error::{HtmlDiffError, HtmlDiffResult};
pub use html::{compare_html, compare_segments, PathTracker};
pub use segment::{diff_chars, DiffSegment, SegmentKind};
