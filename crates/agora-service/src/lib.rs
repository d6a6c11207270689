//! # agora-service
//!
//! Application layer: engagement business logic, the service dependency
//! container, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    progress_response, ActionOutcomeResponse, ContentActionRequest, CountersResponse,
    PendingBadgeResponse, PointsResponse, ProgressResponse, ReactRequest, ReactingUserResponse,
    ReactionsResponse, RegisterContentRequest, StreakResponse,
};
pub use services::{
    ActionOutcome, BadgeService, EngagementService, PointsService, ProgressSnapshot, ReactOutcome,
    ReactionService, ReactionView, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, StreakService, ToggleOutcome,
};
