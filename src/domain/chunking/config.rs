//! Chunking configuration types

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Sizing configuration for the chunk assembler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Preferred chunk size in characters; accumulation flushes once it is reached
    pub target_length: usize,
    /// Hard upper bound for an assembled chunk
    pub max_length: usize,
    /// Paragraphs shorter than this are dropped outright
    pub min_length: usize,
}

impl ChunkerConfig {
    /// Create a configuration with explicit sizes
    pub fn new(target_length: usize, max_length: usize, min_length: usize) -> Self {
        Self {
            target_length,
            max_length,
            min_length,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.target_length == 0 {
            return Err(DomainError::validation(
                "target_length must be greater than 0",
            ));
        }

        if self.max_length < self.target_length {
            return Err(DomainError::validation(
                "max_length must be greater than or equal to target_length",
            ));
        }

        if self.min_length > self.target_length {
            return Err(DomainError::validation(
                "min_length must be less than or equal to target_length",
            ));
        }

        Ok(())
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            target_length: 300,
            max_length: 600,
            min_length: 50,
        }
    }
}

/// Thresholds for the difficulty heuristic and the typing-time estimate.
///
/// The defaults are calibrated for reasonable-looking UI output, not derived
/// empirically; they are configuration, not law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Average word length above which a chunk is `hard`
    pub hard_avg_word_length: f64,
    /// Average word length above which a chunk is at least `medium`
    pub medium_avg_word_length: f64,
    /// Punctuation-per-word ratio above which a chunk is `hard`
    pub hard_punctuation_ratio: f64,
    /// Punctuation-per-word ratio above which a chunk is at least `medium`
    pub medium_punctuation_ratio: f64,
    /// Typing-speed baseline used for the time estimate
    pub words_per_minute: f64,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            hard_avg_word_length: 6.0,
            medium_avg_word_length: 4.0,
            hard_punctuation_ratio: 0.1,
            medium_punctuation_ratio: 0.05,
            words_per_minute: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        let config = ChunkerConfig::default();
        assert_eq!(config.target_length, 300);
        assert_eq!(config.max_length, 600);
        assert_eq!(config.min_length, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_target_rejected() {
        let config = ChunkerConfig::new(0, 100, 10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_max_below_target_rejected() {
        let config = ChunkerConfig::new(300, 200, 50);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_above_target_rejected() {
        let config = ChunkerConfig::new(100, 200, 150);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_annotator_defaults() {
        let config = AnnotatorConfig::default();
        assert_eq!(config.words_per_minute, 40.0);
        assert_eq!(config.hard_avg_word_length, 6.0);
    }
}
