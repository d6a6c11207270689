//! Query extractor for "who reacted" listings

use axum::{async_trait, extract::FromRequestParts, extract::Query, http::request::Parts};
use serde::Deserialize;

use agora_core::ReactionKind;

use crate::response::ApiError;

/// Default page size
const DEFAULT_LIMIT: i64 = 50;

/// Raw query parameters
#[derive(Debug, Deserialize)]
struct RawParams {
    /// Filter by reaction type tag
    #[serde(rename = "type")]
    kind: Option<String>,
    limit: Option<i64>,
}

/// Parsed query for reacting-user listings
#[derive(Debug, Clone, Copy)]
pub struct ReactionUsersQuery {
    pub kind: Option<ReactionKind>,
    pub limit: i64,
}

#[async_trait]
impl<S> FromRequestParts<S> for ReactionUsersQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw): Query<RawParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_query("Malformed query string"))?;

        let kind = raw.kind.as_deref().map(str::parse::<ReactionKind>).transpose()?;

        Ok(ReactionUsersQuery {
            kind,
            limit: raw.limit.unwrap_or(DEFAULT_LIMIT),
        })
    }
}
