//! # agora-core
//!
//! Domain layer for the engagement engine: entities, value objects, repository
//! and notifier ports, and engagement events. This crate has zero dependencies
//! on infrastructure (storage backend, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    badge_for_count, first_badge, milestones, next_target, ActionCounters, BadgeRule,
    PointsBalance, ReactionRecord, ReactionTally, StreakChange, StreakState, UserProgress,
    STREAK_MILESTONES,
};
pub use error::DomainError;
pub use events::{BadgeEarnedBody, EngagementEvent, ReactionEventBody, StreakExtendedBody};
pub use traits::{
    ContentRepository, Notifier, NotifyError, NotifyResult, ProgressRepository, ReactingUser,
    ReactionRepository, RepoResult,
};
pub use value_objects::{ContentKind, CounterKind, Id, IdParseError, ReactionKind, ScoredAction};
