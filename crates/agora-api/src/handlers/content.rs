//! Content registration handlers
//!
//! The ingestion boundary: the owning platform registers each reactable item
//! with its author so the engine can resolve notification recipients, and
//! unregisters it on deletion (which cascades to the item's reactions).

use axum::{extract::State, Json};
use agora_service::{EngagementService, RegisterContentRequest};

use crate::extractors::ContentPath;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Register a content item and its owner
///
/// PUT /content/{kind}/{id}  { "owner_id": "…" }
pub async fn register_content(
    State(state): State<AppState>,
    content: ContentPath,
    Json(body): Json<RegisterContentRequest>,
) -> ApiResult<NoContent> {
    state
        .service_context()
        .content_repo()
        .register(content.kind, content.id, body.owner_id)
        .await?;
    Ok(NoContent)
}

/// Remove a content item and cascade its reactions
///
/// DELETE /content/{kind}/{id}
pub async fn remove_content(
    State(state): State<AppState>,
    content: ContentPath,
) -> ApiResult<NoContent> {
    let service = EngagementService::new(state.service_context());
    service.remove_content(content.kind, content.id).await?;
    Ok(NoContent)
}
