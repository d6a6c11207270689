//! Progress and streak handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use agora_core::Id;
use agora_service::{
    progress_response, BadgeService, EngagementService, ProgressResponse, StreakResponse,
};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Get a user's gamification progress
///
/// GET /users/{user_id}/progress
pub async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ProgressResponse>> {
    let user_id: Id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let ctx = state.service_context();
    let progress = ctx.progress_repo().get(user_id).await?;
    let snapshot = BadgeService::snapshot_of(&progress);

    Ok(Json(progress_response(user_id, &progress, &snapshot)))
}

/// Record a visit for the caller's streak
///
/// POST /users/@me/visits
pub async fn record_visit(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<StreakResponse>> {
    let service = EngagementService::new(state.service_context());
    let streak = service.record_visit(auth.user_id, Utc::now()).await?;
    Ok(Json(StreakResponse::from(streak)))
}
