//! Request extractors

mod auth;
mod content_path;
mod reaction_query;

pub use auth::{AuthUser, OptionalAuthUser, USER_ID_HEADER};
pub use content_path::ContentPath;
pub use reaction_query::ReactionUsersQuery;
