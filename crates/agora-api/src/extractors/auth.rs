//! Caller identity extractor
//!
//! The auth/session layer lives upstream; the gateway validates the session
//! and injects the caller's id as the `x-user-id` header. These extractors
//! only parse it.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use agora_core::Id;

use crate::response::ApiError;

/// Header carrying the authenticated caller's id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated caller
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Id,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: Id) -> Self {
        Self { user_id }
    }
}

fn parse_identity(parts: &Parts) -> Result<Option<Id>, ApiError> {
    let Some(raw) = parts.headers.get(USER_ID_HEADER) else {
        return Ok(None);
    };

    let value = raw.to_str().map_err(|_| {
        tracing::warn!("Non-ASCII identity header");
        ApiError::InvalidAuthFormat
    })?;

    let user_id = value.parse().map_err(|_| {
        tracing::warn!(value, "Unparseable identity header");
        ApiError::InvalidAuthFormat
    })?;

    Ok(Some(user_id))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parse_identity(parts)? {
            Some(user_id) => Ok(AuthUser::new(user_id)),
            None => Err(ApiError::MissingAuth),
        }
    }
}

/// Optional caller identity
///
/// Returns None when no identity header is present, or an error if the
/// header is present but malformed.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuthUser(parse_identity(parts)?.map(AuthUser::new)))
    }
}
