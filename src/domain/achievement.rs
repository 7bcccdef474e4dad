//! Achievement catalog and unlock records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::session::StatsSummary;
use crate::domain::storage::StorageEntity;

/// Rule that earns an achievement, checked against the stats summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementRule {
    SessionsCompleted(u64),
    WpmReached(f64),
    AccuracyReached(f64),
    StreakDays(u32),
}

impl AchievementRule {
    /// Check whether the summary satisfies this rule
    pub fn is_satisfied_by(&self, summary: &StatsSummary) -> bool {
        match *self {
            Self::SessionsCompleted(n) => summary.total_sessions >= n,
            Self::WpmReached(wpm) => summary.best_wpm >= wpm,
            Self::AccuracyReached(pct) => summary.average_accuracy >= pct,
            Self::StreakDays(days) => summary.current_streak_days >= days,
        }
    }
}

/// Static definition of one achievement
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub rule: AchievementRule,
}

/// The built-in achievement catalog
pub const CATALOG: &[AchievementDef] = &[
    AchievementDef {
        id: "first-session",
        name: "First Steps",
        description: "Complete your first practice session",
        rule: AchievementRule::SessionsCompleted(1),
    },
    AchievementDef {
        id: "ten-sessions",
        name: "Getting Serious",
        description: "Complete 10 practice sessions",
        rule: AchievementRule::SessionsCompleted(10),
    },
    AchievementDef {
        id: "hundred-sessions",
        name: "Marathon Typist",
        description: "Complete 100 practice sessions",
        rule: AchievementRule::SessionsCompleted(100),
    },
    AchievementDef {
        id: "wpm-40",
        name: "Keyboard Commuter",
        description: "Reach 40 words per minute",
        rule: AchievementRule::WpmReached(40.0),
    },
    AchievementDef {
        id: "wpm-60",
        name: "Speed Demon",
        description: "Reach 60 words per minute",
        rule: AchievementRule::WpmReached(60.0),
    },
    AchievementDef {
        id: "wpm-80",
        name: "Lightning Fingers",
        description: "Reach 80 words per minute",
        rule: AchievementRule::WpmReached(80.0),
    },
    AchievementDef {
        id: "accuracy-95",
        name: "Precision Typist",
        description: "Hold an average accuracy of 95%",
        rule: AchievementRule::AccuracyReached(95.0),
    },
    AchievementDef {
        id: "streak-3",
        name: "Warming Up",
        description: "Practice 3 days in a row",
        rule: AchievementRule::StreakDays(3),
    },
    AchievementDef {
        id: "streak-7",
        name: "Weekly Habit",
        description: "Practice 7 days in a row",
        rule: AchievementRule::StreakDays(7),
    },
    AchievementDef {
        id: "streak-30",
        name: "Iron Discipline",
        description: "Practice 30 days in a row",
        rule: AchievementRule::StreakDays(30),
    },
];

/// Look up a catalog entry by id
pub fn find_definition(id: &str) -> Option<&'static AchievementDef> {
    CATALOG.iter().find(|def| def.id == id)
}

/// A persisted record that a user unlocked an achievement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    /// Composite key `<user_id>:<achievement_id>`
    key: String,
    user_id: String,
    achievement_id: String,
    unlocked_at: DateTime<Utc>,
}

impl UnlockedAchievement {
    pub fn new(user_id: impl Into<String>, achievement_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let achievement_id = achievement_id.into();

        Self {
            key: format!("{user_id}:{achievement_id}"),
            user_id,
            achievement_id,
            unlocked_at: Utc::now(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn achievement_id(&self) -> &str {
        &self.achievement_id
    }

    pub fn unlocked_at(&self) -> DateTime<Utc> {
        self.unlocked_at
    }
}

impl StorageEntity for UnlockedAchievement {
    type Key = String;

    fn key(&self) -> &Self::Key {
        &self.key
    }

    fn collection() -> &'static str {
        "achievements"
    }
}
