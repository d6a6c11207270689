//! Route definitions
//!
//! All API routes mounted under /api/v1; health endpoints sit outside the
//! versioned tree.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{actions, content, health, progress, reactions};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass API middleware)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(content_routes())
        .merge(engagement_routes())
        .merge(user_routes())
}

/// Content registration and reaction routes
fn content_routes() -> Router<AppState> {
    Router::new()
        // Content registration (ingestion boundary)
        .route("/content/:kind/:id", put(content::register_content))
        .route("/content/:kind/:id", delete(content::remove_content))
        // Reactions
        .route("/content/:kind/:id/reactions", get(reactions::get_reactions))
        .route("/content/:kind/:id/reactions", post(reactions::set_reaction))
        .route(
            "/content/:kind/:id/reactions/users",
            get(reactions::get_reacting_users),
        )
}

/// Scored action reporting
fn engagement_routes() -> Router<AppState> {
    Router::new().route("/engagement/actions", post(actions::record_action))
}

/// User progress routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me/visits", post(progress::record_visit))
        .route("/users/:user_id/progress", get(progress::get_progress))
}
