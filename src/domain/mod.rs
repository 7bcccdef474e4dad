//! Domain layer - Core business logic and entities

pub mod achievement;
pub mod chunking;
pub mod error;
pub mod goal;
pub mod practice;
pub mod session;
pub mod storage;
pub mod user;

pub use achievement::{find_definition, AchievementDef, AchievementRule, UnlockedAchievement, CATALOG};
pub use chunking::{
    annotate, annotate_with, normalize, split, AnnotatorConfig, Chunk, ChunkerConfig, Difficulty,
    TextChunker,
};
pub use error::DomainError;
pub use goal::{Goal, GoalId, GoalMetric, GoalProgress};
pub use practice::PracticeItem;
pub use session::{SessionId, StatsSummary, TypingSession, GUEST_USER_ID};
pub use storage::{Storage, StorageEntity, StorageKey};
pub use user::{validate_password, validate_username, User, UserId};
