//! External-facing practice item built from a chunk

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::chunking::{Chunk, Difficulty};

/// One typing-practice item, constructed 1:1 from a chunk by the content
/// service and serialized directly into the response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeItem {
    pub id: String,
    pub prompt: String,
    pub content: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub context: String,
    pub difficulty: Difficulty,
    pub word_count: usize,
    pub estimated_time: u64,
}

impl PracticeItem {
    /// Wrap a chunk as the `index`-th of `total` items from `context`
    pub fn from_chunk(chunk: Chunk, index: usize, total: usize, context: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            prompt: format!("Passage {} of {}", index + 1, total),
            content: chunk.text,
            item_type: "text".to_string(),
            context: context.to_string(),
            difficulty: chunk.difficulty,
            word_count: chunk.word_count,
            estimated_time: chunk.estimated_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chunking::annotate;

    #[test]
    fn test_from_chunk() {
        let chunk = annotate("The quick brown fox jumps over the lazy dog.");
        let item = PracticeItem::from_chunk(chunk.clone(), 2, 5, "fox.pdf");

        assert_eq!(item.prompt, "Passage 3 of 5");
        assert_eq!(item.content, chunk.text);
        assert_eq!(item.item_type, "text");
        assert_eq!(item.context, "fox.pdf");
        assert_eq!(item.word_count, chunk.word_count);
    }

    #[test]
    fn test_serialized_type_field() {
        let item = PracticeItem::from_chunk(annotate("hello world"), 0, 1, "doc");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"text\""));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = PracticeItem::from_chunk(annotate("hello"), 0, 2, "doc");
        let b = PracticeItem::from_chunk(annotate("world"), 1, 2, "doc");
        assert_ne!(a.id, b.id);
    }
}
