//! Application services over the domain layer

mod achievements;
mod content;
mod goals;
mod stats;

pub use achievements::{AchievementService, AchievementStatus};
pub use content::{ChunkSizeOverrides, ContentService};
pub use goals::{CreateGoalRequest, GoalService, UpdateGoalRequest};
pub use stats::{RecordSessionRequest, StatsService};
