//! Per-chunk annotation: counts, difficulty, time estimate

use super::chunk::{Chunk, Difficulty};
use super::config::AnnotatorConfig;

/// Characters counted as complexity indicators
const COMPLEXITY_CHARS: [char; 5] = [';', ':', ',', '(', ')'];

/// Annotate a chunk text with default thresholds
pub fn annotate(text: &str) -> Chunk {
    annotate_with(text, &AnnotatorConfig::default())
}

/// Annotate a chunk text.
///
/// Every text produces a valid annotation, including the empty string
/// (zero words, `easy`, one second).
pub fn annotate_with(text: &str, config: &AnnotatorConfig) -> Chunk {
    let word_count = text.split_whitespace().count();
    let char_count = text.chars().count();

    let avg_word_length = if word_count == 0 {
        0.0
    } else {
        char_count as f64 / word_count as f64
    };

    let complexity_indicators = text
        .chars()
        .filter(|c| COMPLEXITY_CHARS.contains(c))
        .count() as f64;

    let words = word_count as f64;

    let difficulty = if avg_word_length > config.hard_avg_word_length
        || complexity_indicators > words * config.hard_punctuation_ratio
    {
        Difficulty::Hard
    } else if avg_word_length > config.medium_avg_word_length
        || complexity_indicators > words * config.medium_punctuation_ratio
    {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    };

    let estimated_time = ((words / config.words_per_minute * 60.0).round() as u64).max(1);

    Chunk {
        text: text.to_string(),
        word_count,
        char_count,
        difficulty,
        estimated_time,
    }
}
