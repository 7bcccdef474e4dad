//! Annotated practice-passage chunk

use serde::{Deserialize, Serialize};

/// Three-level difficulty label derived from average word length and
/// punctuation density
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// A bounded span of text intended as one typing-practice passage.
///
/// Immutable once produced; chunks have no relation to each other beyond
/// their position in the output sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Passage text
    pub text: String,
    /// Number of whitespace-delimited tokens
    pub word_count: usize,
    /// Text length in Unicode scalar values
    pub char_count: usize,
    /// Heuristic difficulty label
    pub difficulty: Difficulty,
    /// Estimated typing time in seconds, always at least 1
    pub estimated_time: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_serialization() {
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"easy\"");
        assert_eq!(
            serde_json::to_string(&Difficulty::Medium).unwrap(),
            "\"medium\""
        );
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }
}
