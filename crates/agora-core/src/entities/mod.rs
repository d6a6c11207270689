//! Domain entities - core business objects

mod badge;
mod progress;
mod reaction;

pub use badge::{badge_for_count, first_badge, milestones, next_target, BadgeRule};
pub use progress::{
    ActionCounters, PointsBalance, StreakChange, StreakState, UserProgress, STREAK_MILESTONES,
};
pub use reaction::{ReactionRecord, ReactionTally};
