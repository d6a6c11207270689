//! Data transfer objects for the HTTP surface

mod mappers;
mod requests;
mod responses;

pub use mappers::progress_response;
pub use requests::{ContentActionRequest, ReactRequest, RegisterContentRequest};
pub use responses::{
    ActionOutcomeResponse, CountersResponse, PendingBadgeResponse, PointsResponse,
    ProgressResponse, ReactingUserResponse, ReactionsResponse, StreakResponse,
};
