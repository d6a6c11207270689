//! Reaction handlers
//!
//! Endpoints for reading and toggling reactions on content items.

use axum::{extract::State, Json};
use agora_core::ReactionKind;
use agora_service::{
    EngagementService, ReactRequest, ReactingUserResponse, ReactionService, ReactionsResponse,
};

use crate::extractors::{AuthUser, ContentPath, OptionalAuthUser, ReactionUsersQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get reaction counts and the caller's own reaction
///
/// GET /content/{kind}/{id}/reactions
pub async fn get_reactions(
    State(state): State<AppState>,
    content: ContentPath,
    auth: OptionalAuthUser,
) -> ApiResult<Json<ReactionsResponse>> {
    let service = ReactionService::new(state.service_context());
    let view = service
        .get_reactions(content.kind, content.id, auth.0.map(|a| a.user_id))
        .await?;
    Ok(Json(ReactionsResponse::from(&view)))
}

/// Toggle the caller's reaction
///
/// POST /content/{kind}/{id}/reactions  { "type": "heart" }
pub async fn set_reaction(
    State(state): State<AppState>,
    content: ContentPath,
    auth: AuthUser,
    Json(body): Json<ReactRequest>,
) -> ApiResult<Json<ReactionsResponse>> {
    let kind: ReactionKind = body.kind.parse()?;

    let service = EngagementService::new(state.service_context());
    let outcome = service
        .react(content.kind, content.id, auth.user_id, kind)
        .await?;
    Ok(Json(ReactionsResponse::from(&outcome.view)))
}

/// List users who reacted
///
/// GET /content/{kind}/{id}/reactions/users?type=&limit=
pub async fn get_reacting_users(
    State(state): State<AppState>,
    content: ContentPath,
    query: ReactionUsersQuery,
) -> ApiResult<Json<Vec<ReactingUserResponse>>> {
    let service = ReactionService::new(state.service_context());
    let users = service
        .list_reacting_users(content.kind, content.id, query.kind, query.limit)
        .await?;
    Ok(Json(users.iter().map(ReactingUserResponse::from).collect()))
}
