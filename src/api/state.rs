//! Application state for shared services

use std::sync::Arc;

use crate::domain::goal::{Goal, GoalProgress};
use crate::domain::session::{StatsSummary, TypingSession};
use crate::domain::{DomainError, UnlockedAchievement, User};
use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::services::{
    AchievementService, AchievementStatus, ContentService, CreateGoalRequest, GoalService,
    RecordSessionRequest, StatsService, UpdateGoalRequest,
};
use crate::infrastructure::user::{RegisterUserRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub jwt_service: Arc<dyn JwtGenerator>,
    pub stats_service: Arc<dyn StatsServiceTrait>,
    pub achievement_service: Arc<dyn AchievementServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub content_service: Arc<ContentService>,
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError>;
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<User>, DomainError>;
}

/// Trait for stats service operations
#[async_trait::async_trait]
pub trait StatsServiceTrait: Send + Sync {
    async fn record(
        &self,
        user_id: &str,
        request: RecordSessionRequest,
    ) -> Result<TypingSession, DomainError>;
    async fn list(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<TypingSession>, DomainError>;
    async fn summary(&self, user_id: &str) -> Result<StatsSummary, DomainError>;
}

/// Trait for achievement service operations
#[async_trait::async_trait]
pub trait AchievementServiceTrait: Send + Sync {
    async fn evaluate(
        &self,
        user_id: &str,
        summary: &StatsSummary,
    ) -> Result<Vec<UnlockedAchievement>, DomainError>;
    async fn list(&self, user_id: &str) -> Result<Vec<AchievementStatus>, DomainError>;
}

/// Trait for goal service operations
#[async_trait::async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn create(&self, user_id: &str, request: CreateGoalRequest) -> Result<Goal, DomainError>;
    async fn list(&self, user_id: &str) -> Result<Vec<Goal>, DomainError>;
    async fn get(&self, user_id: &str, id: &str) -> Result<Goal, DomainError>;
    async fn update(
        &self,
        user_id: &str,
        id: &str,
        request: UpdateGoalRequest,
    ) -> Result<Goal, DomainError>;
    async fn delete(&self, user_id: &str, id: &str) -> Result<bool, DomainError>;
    async fn progress(
        &self,
        user_id: &str,
        summary: &StatsSummary,
    ) -> Result<Vec<GoalProgress>, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        UserService::register(self, request).await
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::authenticate(self, username, password).await
    }

    async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }
}

#[async_trait::async_trait]
impl StatsServiceTrait for StatsService {
    async fn record(
        &self,
        user_id: &str,
        request: RecordSessionRequest,
    ) -> Result<TypingSession, DomainError> {
        StatsService::record(self, user_id, request).await
    }

    async fn list(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<TypingSession>, DomainError> {
        StatsService::list(self, user_id, limit).await
    }

    async fn summary(&self, user_id: &str) -> Result<StatsSummary, DomainError> {
        StatsService::summary(self, user_id).await
    }
}

#[async_trait::async_trait]
impl AchievementServiceTrait for AchievementService {
    async fn evaluate(
        &self,
        user_id: &str,
        summary: &StatsSummary,
    ) -> Result<Vec<UnlockedAchievement>, DomainError> {
        AchievementService::evaluate(self, user_id, summary).await
    }

    async fn list(&self, user_id: &str) -> Result<Vec<AchievementStatus>, DomainError> {
        AchievementService::list(self, user_id).await
    }
}

#[async_trait::async_trait]
impl GoalServiceTrait for GoalService {
    async fn create(&self, user_id: &str, request: CreateGoalRequest) -> Result<Goal, DomainError> {
        GoalService::create(self, user_id, request).await
    }

    async fn list(&self, user_id: &str) -> Result<Vec<Goal>, DomainError> {
        GoalService::list(self, user_id).await
    }

    async fn get(&self, user_id: &str, id: &str) -> Result<Goal, DomainError> {
        GoalService::get(self, user_id, id).await
    }

    async fn update(
        &self,
        user_id: &str,
        id: &str,
        request: UpdateGoalRequest,
    ) -> Result<Goal, DomainError> {
        GoalService::update(self, user_id, id, request).await
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<bool, DomainError> {
        GoalService::delete(self, user_id, id).await
    }

    async fn progress(
        &self,
        user_id: &str,
        summary: &StatsSummary,
    ) -> Result<Vec<GoalProgress>, DomainError> {
        GoalService::progress(self, user_id, summary).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        jwt_service: Arc<dyn JwtGenerator>,
        stats_service: Arc<dyn StatsServiceTrait>,
        achievement_service: Arc<dyn AchievementServiceTrait>,
        goal_service: Arc<dyn GoalServiceTrait>,
        content_service: Arc<ContentService>,
    ) -> Self {
        Self {
            user_service,
            jwt_service,
            stats_service,
            achievement_service,
            goal_service,
            content_service,
        }
    }
}
