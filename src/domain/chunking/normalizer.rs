//! Cleanup of raw PDF-extracted text
//!
//! Runs before paragraph splitting, so nothing here may touch the blank-line
//! paragraph markers the splitter relies on. Whitespace collapse happens
//! last, per paragraph, inside the splitter.

use once_cell::sync::Lazy;
use regex::Regex;

/// Page markers emitted by the extraction step, e.g. `--- Page 12 ---`
static PAGE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"---\s*Page\s+\d+\s*---").unwrap());

/// A word broken across a line by a trailing hyphen: word-char, hyphen,
/// whitespace containing a line break, continuation word-char
static HYPHEN_LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w)-\s*\n\s*(\w)").unwrap());

/// Lowercase letter glued to an uppercase letter, a common column-merge
/// artifact of PDF extraction
static MISSING_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

/// Placeholder the extractor writes for pages without any text
const EMPTY_PAGE_PLACEHOLDER: &str = "[No text found on this page]";

/// Clean raw extracted text: remove page artifacts, rejoin hyphen-broken
/// words, repair missing spaces. Empty input yields empty output.
pub fn normalize(raw: &str) -> String {
    let text = PAGE_MARKER.replace_all(raw, "");
    let text = text.replace(EMPTY_PAGE_PLACEHOLDER, "");
    let text = HYPHEN_LINE_BREAK.replace_all(&text, "$1$2");
    let text = MISSING_SPACE.replace_all(&text, "$1 $2");
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_page_markers_removed() {
        let raw = "First page text.\n--- Page 2 ---\nSecond page text.";
        let normalized = normalize(raw);
        assert!(!normalized.contains("Page 2"));
        assert!(normalized.contains("First page text."));
        assert!(normalized.contains("Second page text."));
    }

    #[test]
    fn test_empty_page_placeholder_removed() {
        let raw = "Some text.\n[No text found on this page]\nMore text.";
        let normalized = normalize(raw);
        assert!(!normalized.contains("[No text found on this page]"));
    }

    #[test]
    fn test_hyphen_break_rejoined() {
        assert_eq!(normalize("informa-\ntion systems"), "information systems");
        assert_eq!(normalize("informa- \n tion"), "information");
    }

    #[test]
    fn test_hyphenated_compound_on_one_line_kept() {
        assert_eq!(normalize("a well-known fact"), "a well-known fact");
    }

    #[test]
    fn test_missing_space_repaired() {
        assert_eq!(normalize("end of lineStart of next"), "end of line Start of next");
    }

    #[test]
    fn test_paragraph_boundaries_preserved() {
        let raw = "First paragraph.\n\nSecond paragraph.";
        assert_eq!(normalize(raw), "First paragraph.\n\nSecond paragraph.");
    }
}
