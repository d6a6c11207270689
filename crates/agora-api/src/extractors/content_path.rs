//! Content path extractor
//!
//! Parses the `/content/:kind/:id` path segments against the closed content
//! kind vocabulary.

use axum::{async_trait, extract::FromRequestParts, extract::Path, http::request::Parts};

use agora_core::{ContentKind, Id};

use crate::response::ApiError;

/// Parsed (kind, id) pair from the request path
#[derive(Debug, Clone, Copy)]
pub struct ContentPath {
    pub kind: ContentKind,
    pub id: Id,
}

#[async_trait]
impl<S> FromRequestParts<S> for ContentPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((kind, id)): Path<(String, String)> =
            Path::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::invalid_path("Expected /content/:kind/:id"))?;

        let kind: ContentKind = kind.parse()?;
        let id = id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid content id format"))?;

        Ok(ContentPath { kind, id })
    }
}
