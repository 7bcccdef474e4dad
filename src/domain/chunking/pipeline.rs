//! Chunking pipeline facade

use super::annotator;
use super::assembler;
use super::chunk::Chunk;
use super::config::{AnnotatorConfig, ChunkerConfig};
use super::normalizer;
use super::splitter;
use crate::domain::DomainError;

/// Turns raw extracted text into annotated practice chunks.
///
/// Pure and stateless: normalize, split into paragraph units, assemble into
/// target-sized chunks, annotate. Each invocation operates on its own input
/// and holds nothing across calls.
#[derive(Debug, Clone, Default)]
pub struct TextChunker {
    annotator: AnnotatorConfig,
}

impl TextChunker {
    /// Create a chunker with default annotation thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chunker with custom annotation thresholds
    pub fn with_annotator(annotator: AnnotatorConfig) -> Self {
        Self { annotator }
    }

    /// Run the full pipeline over raw text
    pub fn chunk(&self, raw: &str, config: &ChunkerConfig) -> Result<Vec<Chunk>, DomainError> {
        config.validate()?;

        let normalized = normalizer::normalize(raw);
        let paragraphs = splitter::split(&normalized);
        let texts = assembler::assemble(&paragraphs, config);

        Ok(texts
            .iter()
            .map(|text| annotator::annotate_with(text, &self.annotator))
            .collect())
    }
}
