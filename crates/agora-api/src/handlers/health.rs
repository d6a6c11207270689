//! Health check handlers

use axum::Json;
use serde_json::{json, Value};

/// Liveness check
///
/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness check
///
/// GET /health/ready
///
/// The engine carries no external connections of its own, so readiness
/// follows liveness.
pub async fn readiness_check() -> Json<Value> {
    Json(json!({ "status": "ready" }))
}
