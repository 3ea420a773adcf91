//! Character-level diff segments.
//!
//! Uses the `similar` crate (Myers diff algorithm) over Unicode scalar
//! values and coalesces consecutive changes of the same kind into a single
//! [`DiffSegment`].

use similar::{ChangeTag, TextDiff};

/// Which side(s) of the comparison a segment belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Present in both expected and actual.
    Unchanged,
    /// Present only in actual.
    Added,
    /// Present only in expected.
    Removed,
}

impl From<ChangeTag> for SegmentKind {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => Self::Unchanged,
            ChangeTag::Insert => Self::Added,
            ChangeTag::Delete => Self::Removed,
        }
    }
}

/// One contiguous run of characters sharing the same [`SegmentKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffSegment {
    pub kind: SegmentKind,
    pub text: String,
}

impl DiffSegment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn unchanged(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Unchanged, text)
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Added, text)
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Removed, text)
    }

    /// Returns `true` for added or removed segments.
    pub fn is_diff(&self) -> bool {
        self.kind != SegmentKind::Unchanged
    }
}

/// Compute the ordered character diff between `expected` and `actual`.
///
/// Unchanged and removed segments together rebuild `expected`; unchanged
/// and added segments together rebuild `actual`. No segment is empty.
pub fn diff_chars(expected: &str, actual: &str) -> Vec<DiffSegment> {
    let text_diff = TextDiff::from_chars(expected, actual);

    let mut segments: Vec<DiffSegment> = Vec::new();
    for change in text_diff.iter_all_changes() {
        let kind = SegmentKind::from(change.tag());
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => segments.push(DiffSegment::new(kind, change.value())),
        }
    }
    segments
}
