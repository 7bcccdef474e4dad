//! Goal service - CRUD for practice goals plus progress reporting

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::goal::{Goal, GoalId, GoalMetric, GoalProgress};
use crate::domain::session::StatsSummary;
use crate::domain::{DomainError, Storage};

/// Request to create a new goal
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoalRequest {
    pub title: String,
    pub metric: GoalMetric,
    pub target_value: f64,
}

/// Request to update an existing goal
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGoalRequest {
    pub title: Option<String>,
    pub target_value: Option<f64>,
}

/// Goal service over the goal collection
#[derive(Debug)]
pub struct GoalService {
    storage: Arc<dyn Storage<Goal>>,
}

impl GoalService {
    pub fn new(storage: Arc<dyn Storage<Goal>>) -> Self {
        Self { storage }
    }

    /// Create a new goal for a user
    pub async fn create(
        &self,
        user_id: &str,
        request: CreateGoalRequest,
    ) -> Result<Goal, DomainError> {
        let goal = Goal::new(user_id, request.title, request.metric, request.target_value)?;
        self.storage.create(goal).await
    }

    /// List a user's goals
    pub async fn list(&self, user_id: &str) -> Result<Vec<Goal>, DomainError> {
        let goals = self.storage.list().await?;
        Ok(goals.into_iter().filter(|g| g.user_id() == user_id).collect())
    }

    /// Get one of a user's goals by ID
    pub async fn get(&self, user_id: &str, id: &str) -> Result<Goal, DomainError> {
        let goal_id = GoalId::new(id)?;

        let goal = self
            .storage
            .get(&goal_id)
            .await?
            .filter(|g| g.user_id() == user_id)
            .ok_or_else(|| DomainError::not_found(format!("Goal '{}' not found", id)))?;

        Ok(goal)
    }

    /// Update a user's goal
    pub async fn update(
        &self,
        user_id: &str,
        id: &str,
        request: UpdateGoalRequest,
    ) -> Result<Goal, DomainError> {
        let mut goal = self.get(user_id, id).await?;

        if let Some(title) = request.title {
            goal.set_title(title)?;
        }

        if let Some(target_value) = request.target_value {
            goal.set_target_value(target_value)?;
        }

        self.storage.update(goal).await
    }

    /// Delete a user's goal, returns true if it existed
    pub async fn delete(&self, user_id: &str, id: &str) -> Result<bool, DomainError> {
        let goal_id = GoalId::new(id)?;

        // Only delete goals belonging to the caller
        match self.storage.get(&goal_id).await? {
            Some(goal) if goal.user_id() == user_id => self.storage.delete(&goal_id).await,
            _ => Ok(false),
        }
    }

    /// Progress of all of a user's goals against their current stats
    pub async fn progress(
        &self,
        user_id: &str,
        summary: &StatsSummary,
    ) -> Result<Vec<GoalProgress>, DomainError> {
        let goals = self.list(user_id).await?;
        Ok(goals.iter().map(|g| g.progress(summary)).collect())
    }
}
