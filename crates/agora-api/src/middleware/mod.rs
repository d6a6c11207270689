//! Middleware stack for the API server
//!
//! Tracing, request timeout, and CORS. Rate limiting and retry policy belong
//! to the calling layer.

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use agora_common::CorsConfig;

use crate::state::AppState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply tracing, timeout, and CORS to the router
pub fn apply_middleware(
    router: Router<AppState>,
    cors: &CorsConfig,
    is_production: bool,
) -> Router<AppState> {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    router
        .layer(
            ServiceBuilder::new()
                .layer(trace)
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::SERVICE_UNAVAILABLE,
                    REQUEST_TIMEOUT,
                )),
        )
        .layer(cors_layer(cors, is_production))
}

/// Browsers may only call this API from configured origins; development runs
/// with no configured origins stay wide open.
fn cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(crate::extractors::USER_ID_HEADER),
        ]);

    if config.allowed_origins.is_empty() && !is_production {
        tracing::warn!("CORS allows any origin; set CORS_ALLOWED_ORIGINS before deploying");
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        tracing::warn!("No valid CORS origins configured; browser requests will be blocked");
    }
    layer.allow_origin(AllowOrigin::list(origins))
}
