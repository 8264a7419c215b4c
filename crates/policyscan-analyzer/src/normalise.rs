//! Text normalisation applied before any rule is evaluated.

use std::sync::OnceLock;

use regex::Regex;
use policyscan_common::{PolicyScanError, Result};

/// Analysis only ever sees this many normalised characters.
pub const MAX_CONTENT_CHARS: usize = 15_000;

/// Normalised content shorter than this is rejected.
pub const MIN_CONTENT_CHARS: usize = 50;

fn markup_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Collapse every whitespace run (newlines included) to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    whitespace_regex().replace_all(text, " ").trim().to_string()
}

/// Strip markup tags, collapse whitespace, trim and truncate to
/// [`MAX_CONTENT_CHARS`] characters. Total: never fails.
pub fn normalise_text(raw: &str) -> String {
    let stripped = markup_regex().replace_all(raw, "");
    let collapsed = collapse_whitespace(&stripped);
    truncate_chars(&collapsed, MAX_CONTENT_CHARS).to_string()
}

/// Normalise `raw` and enforce the minimum analysable length.
pub fn prepare_content(raw: &str) -> Result<String> {
    let text = normalise_text(raw);
    let len = text.chars().count();
    if len < MIN_CONTENT_CHARS {
        return Err(PolicyScanError::InputTooShort { len, min: MIN_CONTENT_CHARS });
    }
    Ok(text)
}

/// Prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup_and_whitespace() {
        let raw = "  <h1>Privacy</h1>\n\n<p>We   collect\tdata.</p>  ";
        assert_eq!(normalise_text(raw), "Privacy We collect data.");
    }

    #[test]
    fn test_truncates_to_limit() {
        let raw = "a".repeat(MAX_CONTENT_CHARS + 500);
        assert_eq!(normalise_text(&raw).chars().count(), MAX_CONTENT_CHARS);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let raw = "é".repeat(MAX_CONTENT_CHARS + 1);
        let out = normalise_text(&raw);
        assert_eq!(out.chars().count(), MAX_CONTENT_CHARS);
    }

    #[test]
    fn test_length_boundary() {
        let exactly_49 = "x".repeat(49);
        let exactly_50 = "x".repeat(50);
        assert!(matches!(
            prepare_content(&exactly_49),
            Err(PolicyScanError::InputTooShort { len: 49, .. })
        ));
        assert_eq!(prepare_content(&exactly_50).unwrap(), exactly_50);
    }

    #[test]
    fn test_length_measured_after_normalisation() {
        // 60 raw characters, 40 once tags and padding are gone
        let raw = format!("<b>{}</b>{}", "y".repeat(40), " ".repeat(13));
        assert!(prepare_content(&raw).is_err());
    }
}
