//! Achievement service - evaluates the catalog against user stats

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::achievement::{UnlockedAchievement, CATALOG};
use crate::domain::session::StatsSummary;
use crate::domain::{DomainError, Storage};

/// One catalog entry with the user's unlock state
#[derive(Debug, Clone, Serialize)]
pub struct AchievementStatus {
    pub id: String,
    pub name: String,
    pub description: String,
    pub unlocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Achievement service over the unlock-record collection
#[derive(Debug)]
pub struct AchievementService {
    storage: Arc<dyn Storage<UnlockedAchievement>>,
}

impl AchievementService {
    pub fn new(storage: Arc<dyn Storage<UnlockedAchievement>>) -> Self {
        Self { storage }
    }

    /// Evaluate the catalog against a summary, persisting any new unlocks
    ///
    /// Idempotent: already-unlocked achievements are skipped, only the
    /// newly earned ones are returned.
    pub async fn evaluate(
        &self,
        user_id: &str,
        summary: &StatsSummary,
    ) -> Result<Vec<UnlockedAchievement>, DomainError> {
        let already_unlocked = self.unlocked_ids(user_id).await?;
        let mut newly_unlocked = Vec::new();

        for def in CATALOG {
            if already_unlocked.contains(def.id) {
                continue;
            }

            if def.rule.is_satisfied_by(summary) {
                let record = UnlockedAchievement::new(user_id, def.id);
                let record = self.storage.create(record).await?;

                tracing::info!(user_id, achievement = def.id, "Achievement unlocked");
                newly_unlocked.push(record);
            }
        }

        Ok(newly_unlocked)
    }

    /// Full catalog with the user's unlock state for each entry
    pub async fn list(&self, user_id: &str) -> Result<Vec<AchievementStatus>, DomainError> {
        let records = self.records_for(user_id).await?;

        Ok(CATALOG
            .iter()
            .map(|def| {
                let record = records.iter().find(|r| r.achievement_id() == def.id);

                AchievementStatus {
                    id: def.id.to_string(),
                    name: def.name.to_string(),
                    description: def.description.to_string(),
                    unlocked: record.is_some(),
                    unlocked_at: record.map(|r| r.unlocked_at()),
                }
            })
            .collect())
    }

    async fn records_for(&self, user_id: &str) -> Result<Vec<UnlockedAchievement>, DomainError> {
        let records = self.storage.list().await?;
        Ok(records
            .into_iter()
            .filter(|r| r.user_id() == user_id)
            .collect())
    }

    async fn unlocked_ids(&self, user_id: &str) -> Result<HashSet<String>, DomainError> {
        Ok(self
            .records_for(user_id)
            .await?
            .into_iter()
            .map(|r| r.achievement_id().to_string())
            .collect())
    }
}
