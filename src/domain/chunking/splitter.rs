//! Paragraph splitting of normalized text

use once_cell::sync::Lazy;
use regex::Regex;

/// One or more blank lines separating paragraph blocks
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Sentence-ending punctuation followed by whitespace
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// Paragraphs longer than this are re-split into sentence groups
const LONG_PARAGRAPH_CHARS: usize = 1000;

/// Upper bound for a re-grouped sentence group
const SENTENCE_GROUP_CHARS: usize = 500;

/// Separator used when re-joining grouped sentences
const SENTENCE_JOIN: &str = ". ";

/// Break normalized text into paragraph units.
///
/// Splits on blank-line boundaries, collapses internal whitespace runs to
/// single spaces, and drops blank blocks. Paragraphs above the long-paragraph
/// threshold are further split into sentence groups. Output order matches
/// input order.
pub fn split(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();

    for block in PARAGRAPH_BREAK.split(text) {
        let paragraph = collapse_whitespace(block);

        if paragraph.is_empty() {
            continue;
        }

        if paragraph.chars().count() > LONG_PARAGRAPH_CHARS {
            paragraphs.extend(split_by_sentences(&paragraph, SENTENCE_GROUP_CHARS));
        } else {
            paragraphs.push(paragraph);
        }
    }

    paragraphs
}

/// Collapse whitespace runs (including newlines) to single spaces
fn collapse_whitespace(block: &str) -> String {
    block.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a paragraph on sentence boundaries and greedily re-group the
/// sentences so each group stays under `group_limit` characters.
///
/// Groups are joined with `". "` and terminated with a period. A single
/// sentence longer than the limit cannot be subdivided further and is
/// emitted as its own oversized group.
pub(crate) fn split_by_sentences(paragraph: &str, group_limit: usize) -> Vec<String> {
    let sentences: Vec<&str> = SENTENCE_BREAK
        .split(paragraph)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let mut groups = Vec::new();
    let mut current = String::new();

    for sentence in sentences {
        if !current.is_empty() {
            let joined_len =
                current.chars().count() + SENTENCE_JOIN.len() + sentence.chars().count();

            if joined_len >= group_limit {
                groups.push(terminate(std::mem::take(&mut current)));
            }
        }

        if current.is_empty() {
            current.push_str(sentence);
        } else {
            current.push_str(SENTENCE_JOIN);
            current.push_str(sentence);
        }
    }

    if !current.is_empty() {
        groups.push(terminate(current));
    }

    groups
}

/// Append a trailing period unless the group already ends in sentence
/// punctuation (the final sentence of a paragraph keeps its own terminator)
fn terminate(mut group: String) -> String {
    if !group.ends_with(['.', '!', '?']) {
        group.push('.');
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(split("").is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(split("  \n\n   \n  ").is_empty());
    }

    #[test]
    fn test_blank_line_split() {
        let paragraphs = split("First paragraph.\n\nSecond paragraph.\n\n\nThird.");
        assert_eq!(
            paragraphs,
            vec!["First paragraph.", "Second paragraph.", "Third."]
        );
    }

    #[test]
    fn test_internal_whitespace_collapsed() {
        let paragraphs = split("one   two\tthree\nfour");
        assert_eq!(paragraphs, vec!["one two three four"]);
    }

    #[test]
    fn test_order_is_stable() {
        let input = "alpha\n\nbeta\n\ngamma";
        assert_eq!(split(input), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_long_paragraph_split_into_sentence_groups() {
        // 26 sentences of ~50 chars each, ~1300 chars total
        let sentence = "The quick brown fox jumps over the lazy dog again";
        let paragraph = (0..26).map(|_| sentence).collect::<Vec<_>>().join(". ");

        let paragraphs = split(&paragraph);

        assert!(paragraphs.len() > 1);
        for group in &paragraphs {
            assert!(group.chars().count() < 500, "group too long: {}", group.len());
            assert!(group.ends_with('.'));
        }
    }

    #[test]
    fn test_sentence_groups_rejoined_with_period() {
        let groups = split_by_sentences("One sentence here. Another one here. Third", 20);
        assert_eq!(groups, vec!["One sentence here.", "Another one here.", "Third."]);
    }

    #[test]
    fn test_single_oversized_sentence_is_kept_whole() {
        let long_sentence = "a".repeat(700);
        let groups = split_by_sentences(&long_sentence, 500);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].chars().count() > 500);
    }

    #[test]
    fn test_split_consumes_interior_terminators() {
        // interior `!`/`?` are consumed by the split and re-joined with periods
        let groups = split_by_sentences("Really important! Are you sure? Yes", 10);
        assert_eq!(groups, vec!["Really important.", "Are you sure.", "Yes."]);
    }

    #[test]
    fn test_final_terminator_kept() {
        let groups = split_by_sentences("First part here. Done already!", 10);
        assert_eq!(groups, vec!["First part here.", "Done already!"]);
    }
}
