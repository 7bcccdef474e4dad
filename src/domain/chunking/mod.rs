//! PDF-to-practice-passage chunking pipeline
//!
//! Data flow: raw text -> normalizer -> splitter -> assembler -> annotator
//! -> ordered sequence of annotated chunks. Every stage is a pure function;
//! the pipeline performs no I/O and holds no state across calls.

mod annotator;
mod assembler;
mod chunk;
mod config;
mod normalizer;
mod pipeline;
mod splitter;

pub use annotator::{annotate, annotate_with};
pub use chunk::{Chunk, Difficulty};
pub use config::{AnnotatorConfig, ChunkerConfig};
pub use normalizer::normalize;
pub use pipeline::TextChunker;
pub use splitter::split;
