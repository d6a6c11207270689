//! Business logic services
//!
//! Each engine component is one service borrowing the shared
//! `ServiceContext`. `EngagementService` is the dispatcher the HTTP layer
//! calls; the others are its collaborators and are individually testable.

pub mod badge;
pub mod context;
pub mod engagement;
pub mod error;
pub mod points;
pub mod reaction;
pub mod streak;

// Re-export all services for convenience
pub use badge::{BadgeService, PendingBadge, ProgressSnapshot};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use engagement::{ActionOutcome, EngagementService, ReactOutcome};
pub use error::{ServiceError, ServiceResult};
pub use points::PointsService;
pub use reaction::{ReactionService, ReactionView, ToggleOutcome};
pub use streak::StreakService;
