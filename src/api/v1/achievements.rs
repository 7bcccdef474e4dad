//! Achievement endpoint handlers

use axum::extract::State;
use serde::Serialize;

use crate::api::middleware::OptionalUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::infrastructure::services::AchievementStatus;

/// List response wrapper
#[derive(Debug, Serialize)]
pub struct AchievementsResponse {
    pub achievements: Vec<AchievementStatus>,
}

/// GET /v1/achievements
pub async fn list_achievements(
    State(state): State<AppState>,
    user: OptionalUser,
) -> Result<Json<AchievementsResponse>, ApiError> {
    let achievements = state.achievement_service.list(user.user_id()).await?;
    Ok(Json(AchievementsResponse { achievements }))
}
