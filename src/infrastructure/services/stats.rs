//! Stats service - typing session records and aggregate summaries

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};

use crate::domain::session::{StatsSummary, TypingSession};
use crate::domain::{DomainError, Storage};

/// Request to record a completed typing session
#[derive(Debug, Clone)]
pub struct RecordSessionRequest {
    pub wpm: f64,
    pub accuracy: f64,
    pub duration_seconds: u64,
    pub characters_typed: usize,
    pub errors: usize,
    pub context: Option<String>,
}

/// Stats service over the session collection
#[derive(Debug)]
pub struct StatsService {
    storage: Arc<dyn Storage<TypingSession>>,
}

impl StatsService {
    pub fn new(storage: Arc<dyn Storage<TypingSession>>) -> Self {
        Self { storage }
    }

    /// Record a completed session for a user
    pub async fn record(
        &self,
        user_id: &str,
        request: RecordSessionRequest,
    ) -> Result<TypingSession, DomainError> {
        let session = TypingSession::new(
            user_id,
            request.wpm,
            request.accuracy,
            request.duration_seconds,
            request.characters_typed,
            request.errors,
            request.context,
        )?;

        tracing::debug!(user_id, wpm = session.wpm(), "Recording typing session");

        self.storage.create(session).await
    }

    /// List a user's sessions, newest first, optionally limited
    pub async fn list(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<TypingSession>, DomainError> {
        let mut sessions = self.sessions_for(user_id).await?;
        sessions.sort_by(|a, b| b.completed_at().cmp(&a.completed_at()));

        if let Some(limit) = limit {
            sessions.truncate(limit);
        }

        Ok(sessions)
    }

    /// Aggregate summary of a user's practice history
    pub async fn summary(&self, user_id: &str) -> Result<StatsSummary, DomainError> {
        let sessions = self.sessions_for(user_id).await?;

        if sessions.is_empty() {
            return Ok(StatsSummary::empty());
        }

        let total_sessions = sessions.len() as u64;
        let total_practice_seconds: u64 = sessions.iter().map(|s| s.duration_seconds()).sum();
        let average_wpm = sessions.iter().map(|s| s.wpm()).sum::<f64>() / sessions.len() as f64;
        let best_wpm = sessions.iter().map(|s| s.wpm()).fold(0.0, f64::max);
        let average_accuracy =
            sessions.iter().map(|s| s.accuracy()).sum::<f64>() / sessions.len() as f64;
        let last_practice_at = sessions.iter().map(|s| s.completed_at()).max();

        let practice_days: HashSet<NaiveDate> = sessions
            .iter()
            .map(|s| s.completed_at().date_naive())
            .collect();

        Ok(StatsSummary {
            total_sessions,
            total_practice_seconds,
            average_wpm,
            best_wpm,
            average_accuracy,
            current_streak_days: current_streak(&practice_days),
            last_practice_at,
        })
    }

    async fn sessions_for(&self, user_id: &str) -> Result<Vec<TypingSession>, DomainError> {
        let sessions = self.storage.list().await?;
        Ok(sessions
            .into_iter()
            .filter(|s| s.user_id() == user_id)
            .collect())
    }
}

/// Consecutive practice days ending today or yesterday
///
/// A streak that ended yesterday still counts so users do not lose it
/// before practicing on the current day.
fn current_streak(practice_days: &HashSet<NaiveDate>) -> u32 {
    let today = Utc::now().date_naive();

    let mut cursor = if practice_days.contains(&today) {
        today
    } else if practice_days.contains(&(today - Duration::days(1))) {
        today - Duration::days(1)
    } else {
        return 0;
    };

    let mut streak = 0;

    while practice_days.contains(&cursor) {
        streak += 1;
        cursor -= Duration::days(1);
    }

    streak
}
