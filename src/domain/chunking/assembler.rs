//! Greedy assembly of paragraph units into target-sized chunks

use tracing::warn;

use super::config::ChunkerConfig;
use super::splitter;

/// Separator between paragraphs merged into one chunk
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Group paragraph units into chunk texts bounded by the configured sizes.
///
/// Single greedy pass, no backtracking:
/// - paragraphs shorter than `min_length` are dropped, not merged;
/// - paragraphs longer than `max_length` flush the pending accumulation and
///   are split by sentence boundary, each sub-chunk emitted directly;
/// - otherwise paragraphs accumulate; if adding one would push the joined
///   length over `max_length` the pending chunk flushes first, and once the
///   accumulation reaches `target_length` it flushes immediately;
/// - the trailing accumulation always flushes, with no minimum enforced.
///
/// All lengths count Unicode scalar values and include the separators that
/// the emitted join actually contains.
pub fn assemble(paragraphs: &[String], config: &ChunkerConfig) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut pending: Vec<&str> = Vec::new();
    let mut pending_len = 0usize;

    for paragraph in paragraphs {
        let paragraph_len = paragraph.chars().count();

        if paragraph_len < config.min_length {
            continue;
        }

        if paragraph_len > config.max_length {
            flush(&mut pending, &mut pending_len, &mut chunks);

            for sub_chunk in splitter::split_by_sentences(paragraph, config.max_length) {
                let sub_len = sub_chunk.chars().count();
                if sub_len > config.max_length {
                    // A paragraph with no sentence punctuation cannot be
                    // subdivided; emit it oversized rather than truncate.
                    warn!(
                        chars = sub_len,
                        max_length = config.max_length,
                        "sentence split left a chunk above max_length"
                    );
                }
                chunks.push(sub_chunk);
            }

            continue;
        }

        let joined_len = if pending.is_empty() {
            paragraph_len
        } else {
            pending_len + PARAGRAPH_SEPARATOR.len() + paragraph_len
        };

        if joined_len > config.max_length {
            flush(&mut pending, &mut pending_len, &mut chunks);
            pending.push(paragraph);
            pending_len = paragraph_len;
        } else {
            pending.push(paragraph);
            pending_len = joined_len;
        }

        if pending_len >= config.target_length {
            flush(&mut pending, &mut pending_len, &mut chunks);
        }
    }

    flush(&mut pending, &mut pending_len, &mut chunks);
    chunks
}

fn flush(pending: &mut Vec<&str>, pending_len: &mut usize, chunks: &mut Vec<String>) {
    if !pending.is_empty() {
        chunks.push(pending.join(PARAGRAPH_SEPARATOR));
        pending.clear();
        *pending_len = 0;
    }
}
