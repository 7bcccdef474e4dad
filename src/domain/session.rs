//! Typing-session entity and per-user statistics summary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Reserved user id for unauthenticated practice sessions
pub const GUEST_USER_ID: &str = "guest";

/// Session identifier (UUID)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl StorageKey for SessionId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recorded typing-practice run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingSession {
    id: SessionId,
    user_id: String,
    wpm: f64,
    accuracy: f64,
    duration_seconds: u64,
    characters_typed: usize,
    errors: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
    completed_at: DateTime<Utc>,
}

impl TypingSession {
    /// Create a validated session record stamped with the current time
    pub fn new(
        user_id: impl Into<String>,
        wpm: f64,
        accuracy: f64,
        duration_seconds: u64,
        characters_typed: usize,
        errors: usize,
        context: Option<String>,
    ) -> Result<Self, DomainError> {
        if !wpm.is_finite() || wpm < 0.0 {
            return Err(DomainError::validation("wpm must be a non-negative number"));
        }

        if !accuracy.is_finite() || !(0.0..=100.0).contains(&accuracy) {
            return Err(DomainError::validation(
                "accuracy must be between 0 and 100",
            ));
        }

        if duration_seconds == 0 {
            return Err(DomainError::validation(
                "duration_seconds must be greater than 0",
            ));
        }

        Ok(Self {
            id: SessionId::generate(),
            user_id: user_id.into(),
            wpm,
            accuracy,
            duration_seconds,
            characters_typed,
            errors,
            context,
            completed_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn wpm(&self) -> f64 {
        self.wpm
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    pub fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }

    pub fn characters_typed(&self) -> usize {
        self.characters_typed
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

impl StorageEntity for TypingSession {
    type Key = SessionId;

    fn key(&self) -> &Self::Key {
        &self.id
    }

    fn collection() -> &'static str {
        "sessions"
    }
}

/// Aggregated statistics for one user, computed from stored sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_sessions: u64,
    pub total_practice_seconds: u64,
    pub average_wpm: f64,
    pub best_wpm: f64,
    pub average_accuracy: f64,
    pub current_streak_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_practice_at: Option<DateTime<Utc>>,
}

impl StatsSummary {
    /// The empty summary returned for users with no recorded sessions
    pub fn empty() -> Self {
        Self {
            total_sessions: 0,
            total_practice_seconds: 0,
            average_wpm: 0.0,
            best_wpm: 0.0,
            average_accuracy: 0.0,
            current_streak_days: 0,
            last_practice_at: None,
        }
    }
}
