//! Practice goals and progress tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::session::StatsSummary;
use crate::domain::storage::{StorageEntity, StorageKey};

/// Unique identifier for a goal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoalId(String);

impl GoalId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("goal id cannot be empty"));
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GoalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for GoalId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Metric a goal is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalMetric {
    Wpm,
    Accuracy,
    Sessions,
}

impl GoalMetric {
    /// Current value of this metric in the summary
    pub fn current_value(&self, summary: &StatsSummary) -> f64 {
        match self {
            Self::Wpm => summary.best_wpm,
            Self::Accuracy => summary.average_accuracy,
            Self::Sessions => summary.total_sessions as f64,
        }
    }
}

/// A user-defined practice goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    id: GoalId,
    user_id: String,
    title: String,
    metric: GoalMetric,
    target_value: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Goal {
    pub fn new(
        user_id: impl Into<String>,
        title: impl Into<String>,
        metric: GoalMetric,
        target_value: f64,
    ) -> Result<Self, DomainError> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err(DomainError::validation("goal title cannot be empty"));
        }

        if !target_value.is_finite() || target_value <= 0.0 {
            return Err(DomainError::validation(
                "goal target value must be a positive number",
            ));
        }

        if matches!(metric, GoalMetric::Accuracy) && target_value > 100.0 {
            return Err(DomainError::validation(
                "accuracy goal target cannot exceed 100",
            ));
        }

        let now = Utc::now();

        Ok(Self {
            id: GoalId::generate(),
            user_id: user_id.into(),
            title,
            metric,
            target_value,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &GoalId {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn metric(&self) -> GoalMetric {
        self.metric
    }

    pub fn target_value(&self) -> f64 {
        self.target_value
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), DomainError> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err(DomainError::validation("goal title cannot be empty"));
        }

        self.title = title;
        self.touch();

        Ok(())
    }

    pub fn set_target_value(&mut self, target_value: f64) -> Result<(), DomainError> {
        if !target_value.is_finite() || target_value <= 0.0 {
            return Err(DomainError::validation(
                "goal target value must be a positive number",
            ));
        }

        self.target_value = target_value;
        self.touch();

        Ok(())
    }

    /// Progress of this goal against the user's current stats
    pub fn progress(&self, summary: &StatsSummary) -> GoalProgress {
        let current_value = self.metric.current_value(summary);
        let percent = ((current_value / self.target_value) * 100.0).clamp(0.0, 100.0);

        GoalProgress {
            goal_id: self.id.clone(),
            title: self.title.clone(),
            metric: self.metric,
            target_value: self.target_value,
            current_value,
            percent,
            completed: current_value >= self.target_value,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl StorageEntity for Goal {
    type Key = GoalId;

    fn key(&self) -> &Self::Key {
        &self.id
    }

    fn collection() -> &'static str {
        "goals"
    }
}

/// Snapshot of how close a goal is to completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    pub goal_id: GoalId,
    pub title: String,
    pub metric: GoalMetric,
    pub target_value: f64,
    pub current_value: f64,
    pub percent: f64,
    pub completed: bool,
}
