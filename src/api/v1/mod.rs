//! v1 API endpoints

pub mod achievements;
pub mod content;
pub mod goals;
pub mod stats;

use axum::{
    Router,
    routing::{get, post},
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(
            "/stats/sessions",
            post(stats::record_session).get(stats::list_sessions),
        )
        .route("/stats/summary", get(stats::get_summary))
        .route("/content/chunks", post(content::chunk_text))
        .route("/content/upload", post(content::upload_document))
        .route("/achievements", get(achievements::list_achievements))
        .route("/goals", post(goals::create_goal).get(goals::list_goals))
        .route("/goals/progress", get(goals::goal_progress))
        .route(
            "/goals/{goal_id}",
            get(goals::get_goal)
                .patch(goals::update_goal)
                .delete(goals::delete_goal),
        )
}
