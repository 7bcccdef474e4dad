//! Content service - turns extracted document text into practice items

use crate::domain::chunking::{ChunkerConfig, TextChunker};
use crate::domain::practice::PracticeItem;
use crate::domain::DomainError;

/// Per-request overrides of the chunk size bounds
#[derive(Debug, Clone, Default)]
pub struct ChunkSizeOverrides {
    pub target_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
}

impl ChunkSizeOverrides {
    fn apply(&self, base: &ChunkerConfig) -> ChunkerConfig {
        ChunkerConfig {
            target_length: self.target_length.unwrap_or(base.target_length),
            max_length: self.max_length.unwrap_or(base.max_length),
            min_length: self.min_length.unwrap_or(base.min_length),
        }
    }
}

/// Content service wrapping the chunking pipeline
#[derive(Debug)]
pub struct ContentService {
    chunker: TextChunker,
    default_config: ChunkerConfig,
}

impl ContentService {
    pub fn new(default_config: ChunkerConfig) -> Self {
        Self {
            chunker: TextChunker::new(),
            default_config,
        }
    }

    /// Chunk raw extracted text into practice items
    ///
    /// `source` names where the text came from (a file name or "text input")
    /// and is carried on every item as its context.
    pub fn chunk_text(
        &self,
        text: &str,
        source: &str,
        overrides: &ChunkSizeOverrides,
    ) -> Result<Vec<PracticeItem>, DomainError> {
        let config = overrides.apply(&self.default_config);
        let chunks = self.chunker.chunk(text, &config)?;

        tracing::debug!(source, chunks = chunks.len(), "Chunked document text");

        let total = chunks.len();
        Ok(chunks
            .into_iter()
            .enumerate()
            .map(|(index, chunk)| PracticeItem::from_chunk(chunk, index, total, source))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_service() -> ContentService {
        ContentService::new(ChunkerConfig::default())
    }

    #[test]
    fn test_chunk_text_produces_items() {
        let service = create_service();
        let text = "The quick brown fox jumps over the lazy dog. \
                    It was a bright cold day in April and the clocks were striking thirteen. \
                    All happy families are alike but every unhappy family is unhappy in its own way.";

        let items = service
            .chunk_text(text, "sample.pdf", &ChunkSizeOverrides::default())
            .unwrap();

        assert!(!items.is_empty());
        assert!(items.iter().all(|i| i.context == "sample.pdf"));
        assert_eq!(items[0].prompt, format!("Passage 1 of {}", items.len()));
    }

    #[test]
    fn test_empty_text_yields_no_items() {
        let service = create_service();

        let items = service
            .chunk_text("", "empty.pdf", &ChunkSizeOverrides::default())
            .unwrap();

        assert!(items.is_empty());
    }

    #[test]
    fn test_overrides_applied() {
        let service = create_service();

        let overrides = ChunkSizeOverrides {
            target_length: Some(100),
            max_length: Some(200),
            min_length: Some(10),
        };

        let paragraph = "word ".repeat(30).trim_end().to_string();
        let text = format!("{paragraph}\n\n{paragraph}\n\n{paragraph}");

        let items = service.chunk_text(&text, "test.txt", &overrides).unwrap();

        assert!(items.iter().all(|i| i.content.chars().count() <= 200));
    }

    #[test]
    fn test_invalid_overrides_rejected() {
        let service = create_service();

        let overrides = ChunkSizeOverrides {
            target_length: Some(500),
            max_length: Some(100),
            min_length: None,
        };

        let result = service.chunk_text("some text", "test.txt", &overrides);
        assert!(result.is_err());
    }
}
