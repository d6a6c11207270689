//! Engagement action handlers
//!
//! Content handlers elsewhere in the platform report scored actions here
//! after their own mutation commits.

use axum::{extract::State, Json};
use agora_core::ScoredAction;
use agora_service::{ActionOutcomeResponse, ContentActionRequest, EngagementService};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Record a scored content action for the caller
///
/// POST /engagement/actions  { "action": "post" }
pub async fn record_action(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<ContentActionRequest>,
) -> ApiResult<Json<ActionOutcomeResponse>> {
    let action: ScoredAction = body.action.parse()?;

    let service = EngagementService::new(state.service_context());
    let outcome = service.record_content_action(auth.user_id, action).await?;
    Ok(Json(ActionOutcomeResponse::from(&outcome)))
}
