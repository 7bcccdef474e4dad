//! Typing session and summary endpoint handlers

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::OptionalUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::achievement::find_definition;
use crate::domain::session::{StatsSummary, TypingSession};
use crate::infrastructure::services::RecordSessionRequest;

/// POST /v1/stats/sessions request body
#[derive(Debug, Deserialize)]
pub struct RecordSessionBody {
    pub wpm: f64,
    pub accuracy: f64,
    pub duration_seconds: u64,
    #[serde(default)]
    pub characters_typed: usize,
    #[serde(default)]
    pub errors: usize,
    pub context: Option<String>,
}

/// Response for a recorded session, including any achievements it unlocked
#[derive(Debug, Serialize)]
pub struct RecordSessionResponse {
    pub session: TypingSession,
    pub unlocked_achievements: Vec<UnlockedSummary>,
}

/// A newly unlocked achievement, with its display name for the client
#[derive(Debug, Serialize)]
pub struct UnlockedSummary {
    pub id: String,
    pub name: String,
}

impl UnlockedSummary {
    fn from_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: find_definition(id)
                .map(|def| def.name.to_string())
                .unwrap_or_else(|| id.to_string()),
        }
    }
}

/// Query parameters for listing sessions
#[derive(Debug, Deserialize)]
pub struct ListSessionsQuery {
    pub limit: Option<usize>,
}

/// List response wrapper
#[derive(Debug, Serialize)]
pub struct SessionsResponse {
    pub sessions: Vec<TypingSession>,
}

/// POST /v1/stats/sessions
///
/// Records a completed typing session and re-evaluates achievements
/// against the updated summary.
pub async fn record_session(
    State(state): State<AppState>,
    user: OptionalUser,
    Json(body): Json<RecordSessionBody>,
) -> Result<Json<RecordSessionResponse>, ApiError> {
    let user_id = user.user_id().to_string();

    debug!(user_id, wpm = body.wpm, "Recording session");

    let session = state
        .stats_service
        .record(
            &user_id,
            RecordSessionRequest {
                wpm: body.wpm,
                accuracy: body.accuracy,
                duration_seconds: body.duration_seconds,
                characters_typed: body.characters_typed,
                errors: body.errors,
                context: body.context,
            },
        )
        .await?;

    let summary = state.stats_service.summary(&user_id).await?;
    let unlocked = state
        .achievement_service
        .evaluate(&user_id, &summary)
        .await?;

    Ok(Json(RecordSessionResponse {
        session,
        unlocked_achievements: unlocked
            .iter()
            .map(|u| UnlockedSummary::from_id(u.achievement_id()))
            .collect(),
    }))
}

/// GET /v1/stats/sessions
pub async fn list_sessions(
    State(state): State<AppState>,
    user: OptionalUser,
    Query(query): Query<ListSessionsQuery>,
) -> Result<Json<SessionsResponse>, ApiError> {
    let sessions = state
        .stats_service
        .list(user.user_id(), query.limit)
        .await?;

    Ok(Json(SessionsResponse { sessions }))
}

/// GET /v1/stats/summary
pub async fn get_summary(
    State(state): State<AppState>,
    user: OptionalUser,
) -> Result<Json<StatsSummary>, ApiError> {
    let summary = state.stats_service.summary(user.user_id()).await?;
    Ok(Json(summary))
}
