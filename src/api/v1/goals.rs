//! Practice goal endpoint handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use tracing::debug;

use crate::api::middleware::OptionalUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::goal::{Goal, GoalProgress};
use crate::infrastructure::services::{CreateGoalRequest, UpdateGoalRequest};

/// List response wrapper
#[derive(Debug, Serialize)]
pub struct GoalsResponse {
    pub goals: Vec<Goal>,
}

/// Progress response wrapper
#[derive(Debug, Serialize)]
pub struct GoalProgressResponse {
    pub progress: Vec<GoalProgress>,
}

/// POST /v1/goals
pub async fn create_goal(
    State(state): State<AppState>,
    user: OptionalUser,
    Json(request): Json<CreateGoalRequest>,
) -> Result<(StatusCode, Json<Goal>), ApiError> {
    debug!(user_id = user.user_id(), title = %request.title, "Creating goal");

    let goal = state.goal_service.create(user.user_id(), request).await?;

    Ok((StatusCode::CREATED, Json(goal)))
}

/// GET /v1/goals
pub async fn list_goals(
    State(state): State<AppState>,
    user: OptionalUser,
) -> Result<Json<GoalsResponse>, ApiError> {
    let goals = state.goal_service.list(user.user_id()).await?;
    Ok(Json(GoalsResponse { goals }))
}

/// GET /v1/goals/{id}
pub async fn get_goal(
    State(state): State<AppState>,
    user: OptionalUser,
    Path(id): Path<String>,
) -> Result<Json<Goal>, ApiError> {
    let goal = state.goal_service.get(user.user_id(), &id).await?;
    Ok(Json(goal))
}

/// PATCH /v1/goals/{id}
pub async fn update_goal(
    State(state): State<AppState>,
    user: OptionalUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateGoalRequest>,
) -> Result<Json<Goal>, ApiError> {
    debug!(user_id = user.user_id(), goal_id = %id, "Updating goal");

    let goal = state.goal_service.update(user.user_id(), &id, request).await?;

    Ok(Json(goal))
}

/// DELETE /v1/goals/{id}
pub async fn delete_goal(
    State(state): State<AppState>,
    user: OptionalUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.goal_service.delete(user.user_id(), &id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("Goal '{}' not found", id)))
    }
}

/// GET /v1/goals/progress
pub async fn goal_progress(
    State(state): State<AppState>,
    user: OptionalUser,
) -> Result<Json<GoalProgressResponse>, ApiError> {
    let summary = state.stats_service.summary(user.user_id()).await?;
    let progress = state
        .goal_service
        .progress(user.user_id(), &summary)
        .await?;

    Ok(Json(GoalProgressResponse { progress }))
}
