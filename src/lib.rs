//! TypeTutor API
//!
//! Backend for a typing practice application:
//! - Typing session stats, summaries and streaks
//! - Document text chunking into practice passages
//! - Achievements and practice goals
//! - JWT-authenticated user accounts with a guest fallback

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use rand::Rng;
use tracing::info;

use api::state::AppState;
use domain::achievement::UnlockedAchievement;
use domain::goal::Goal;
use domain::session::TypingSession;
use domain::user::User;
use infrastructure::auth::{JwtConfig, JwtService};
use infrastructure::services::{AchievementService, ContentService, GoalService, StatsService};
use infrastructure::storage::{StorageConfig, StorageFactory};
use infrastructure::user::{Argon2Hasher, UserService};

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = build_storage_config(config)?;

    info!("Storage backend: {:?}", storage_config.backend());

    let user_storage = StorageFactory::create::<User>(&storage_config).await?;
    let session_storage = StorageFactory::create::<TypingSession>(&storage_config).await?;
    let achievement_storage =
        StorageFactory::create::<UnlockedAchievement>(&storage_config).await?;
    let goal_storage = StorageFactory::create::<Goal>(&storage_config).await?;

    let user_service = Arc::new(UserService::new(user_storage, Arc::new(Argon2Hasher::new())));
    let stats_service = Arc::new(StatsService::new(session_storage));
    let achievement_service = Arc::new(AchievementService::new(achievement_storage));
    let goal_service = Arc::new(GoalService::new(goal_storage));
    let content_service = Arc::new(ContentService::new(config.chunking.to_chunker_config()));

    let jwt_service = create_jwt_service(config);

    Ok(AppState::new(
        user_service,
        jwt_service,
        stats_service,
        achievement_service,
        goal_service,
        content_service,
    ))
}

fn build_storage_config(config: &AppConfig) -> anyhow::Result<StorageConfig> {
    use infrastructure::storage::StorageBackend;

    let backend = StorageBackend::parse(&config.storage.backend).ok_or_else(|| {
        anyhow::anyhow!("Unknown storage backend '{}'", config.storage.backend)
    })?;

    match backend {
        StorageBackend::InMemory => Ok(StorageConfig::in_memory()),
        StorageBackend::JsonFile => Ok(StorageConfig::json_file(config.storage.data_dir.clone())),
        StorageBackend::Postgres => {
            let url = config.storage.database_url.clone().ok_or_else(|| {
                anyhow::anyhow!("storage.database_url is required for the postgres backend")
            })?;
            Ok(StorageConfig::postgres_url(url))
        }
    }
}

/// Create JWT service from the configured secret, or a random one
fn create_jwt_service(config: &AppConfig) -> Arc<JwtService> {
    let secret = config.auth.jwt_secret.clone().unwrap_or_else(|| {
        tracing::warn!(
            "No JWT secret configured. Generating random secret. \
            Sessions will NOT persist across restarts. \
            Set TYPETUTOR__AUTH__JWT_SECRET for persistent sessions."
        );
        generate_random_secret()
    });

    Arc::new(JwtService::new(JwtConfig::new(
        secret,
        config.auth.jwt_expiration_hours,
    )))
}

fn generate_random_secret() -> String {
    use rand::distributions::Alphanumeric;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
