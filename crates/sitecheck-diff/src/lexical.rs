//! Lexical predicates over a single segment's text.
//!
//! These approximate "is the scan inside a path attribute value" from quotes
//! and angle brackets alone. Every scan is first-match-wins: the first
//! significant character reached decides the answer and nothing beyond it
//! is examined. Expected fixtures were authored against exactly this
//! behavior, so it must not be replaced by a real tokenizer.

/// Attribute prefixes whose quoted value is treated as a path.
const PATH_ATTRIBUTES: [&str; 2] = ["src=", "href="];

/// Quotes at or below this index are never examined by
/// [`ends_with_unclosed_path`].
const MIN_QUOTE_INDEX: usize = 5;

/// Scanning forward, does a `"` appear before any `<` or `>`?
///
/// ```text
/// true:  "            path/to/file.jpg"      file.jpg" <
/// false: < src="...   > "...                 (no quote)
/// ```
pub fn starts_with_closed_path(text: &str) -> bool {
    for c in text.chars() {
        match c {
            '<' | '>' => return false,
            '"' => return true,
            _ => {}
        }
    }
    false
}

/// Does the segment end with the opening quote of a `src`/`href` value?
///
/// Scans backward for the last `"`. Only that quote is considered: it
/// counts if it directly follows `src=` or `href=`, and any other quote
/// disqualifies the segment.
///
/// ```text
/// true:  <img src="      <a href="docs
/// false: src=""          src="..."        alt="
/// ```
pub fn ends_with_unclosed_path(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    for i in (MIN_QUOTE_INDEX..chars.len()).rev() {
        if chars[i] == '"' {
            let before = &chars[..i];
            return PATH_ATTRIBUTES
                .iter()
                .any(|attr| ends_with_ascii(before, attr));
        }
    }
    false
}

/// Scanning backward, does a `<` appear before any `>`?
///
/// ```text
/// true:  <tag src=".../
/// false: <text> src="..      <div/>
/// ```
pub fn ends_with_opening_tag(text: &str) -> bool {
    for c in text.chars().rev() {
        match c {
            '<' => return true,
            '>' => return false,
            _ => {}
        }
    }
    false
}

/// Is the whole text a single path separator?
pub fn is_path_separator(text: &str) -> bool {
    text == "/" || text == "\\"
}

fn ends_with_ascii(chars: &[char], suffix: &str) -> bool {
    let len = suffix.chars().count();
    chars.len() >= len && chars[chars.len() - len..].iter().copied().eq(suffix.chars())
}
