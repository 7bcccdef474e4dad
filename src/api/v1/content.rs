//! Content chunking endpoint handlers

use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::practice::PracticeItem;
use crate::infrastructure::services::ChunkSizeOverrides;

/// POST /v1/content/chunks request body
#[derive(Debug, Deserialize)]
pub struct ChunkTextBody {
    pub text: String,
    /// Where the text came from; carried on every practice item
    pub context: Option<String>,
    pub target_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
}

/// Chunking response for both the JSON and upload endpoints
#[derive(Debug, Serialize)]
pub struct ChunksResponse {
    pub items: Vec<PracticeItem>,
    pub total: usize,
}

impl ChunksResponse {
    fn new(items: Vec<PracticeItem>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

/// POST /v1/content/chunks
pub async fn chunk_text(
    State(state): State<AppState>,
    Json(body): Json<ChunkTextBody>,
) -> Result<Json<ChunksResponse>, ApiError> {
    debug!(length = body.text.len(), "Chunking text");

    let overrides = ChunkSizeOverrides {
        target_length: body.target_length,
        max_length: body.max_length,
        min_length: body.min_length,
    };

    let context = body.context.as_deref().unwrap_or("text input");
    let items = state.content_service.chunk_text(&body.text, context, &overrides)?;

    Ok(Json(ChunksResponse::new(items)))
}

/// POST /v1/content/upload
///
/// Accepts a multipart upload of an extracted-text document and chunks
/// it into practice items. Only text-like content types are accepted.
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ChunksResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::bad_request(format!("Invalid multipart body: {}", err)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(|name| name.to_string());

        if let Some(ref name) = file_name {
            let mime = mime_guess::from_path(name).first_or_text_plain();

            if mime.type_() != mime_guess::mime::TEXT {
                return Err(ApiError::bad_request(format!(
                    "Unsupported file type '{}'. Upload extracted text instead.",
                    mime
                )));
            }
        }

        let text = field
            .text()
            .await
            .map_err(|err| ApiError::bad_request(format!("File is not valid UTF-8 text: {}", err)))?;

        debug!(
            file_name = file_name.as_deref().unwrap_or("<unnamed>"),
            length = text.len(),
            "Chunking uploaded document"
        );

        let context = file_name.as_deref().unwrap_or("uploaded document");
        let items = state
            .content_service
            .chunk_text(&text, context, &ChunkSizeOverrides::default())?;

        return Ok(Json(ChunksResponse::new(items)));
    }

    Err(ApiError::bad_request(
        "Multipart body must contain a 'file' field".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_body_minimal() {
        let body: ChunkTextBody =
            serde_json::from_str(r#"{"text": "Some practice text."}"#).unwrap();

        assert_eq!(body.text, "Some practice text.");
        assert!(body.context.is_none());
        assert!(body.target_length.is_none());
    }

    #[test]
    fn test_chunk_body_with_overrides() {
        let body: ChunkTextBody = serde_json::from_str(
            r#"{"text": "t", "context": "notes.pdf", "target_length": 200, "max_length": 400}"#,
        )
        .unwrap();

        assert_eq!(body.context.as_deref(), Some("notes.pdf"));
        assert_eq!(body.target_length, Some(200));
        assert_eq!(body.max_length, Some(400));
        assert!(body.min_length.is_none());
    }

    #[test]
    fn test_chunks_response_total_matches_items() {
        let response = ChunksResponse::new(Vec::new());
        assert_eq!(response.total, 0);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["total"], 0);
        assert!(json["items"].as_array().unwrap().is_empty());
    }
}
