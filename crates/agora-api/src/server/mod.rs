//! Server setup and initialization
//!
//! Provides the application builder and server runner. The standalone binary
//! wires the in-memory store and the logging notifier; a deployment embeds
//! the engine with its own store and socket gateway behind the same ports.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use agora_common::{AppConfig, AppError, AppResult};
use agora_service::ServiceContextBuilder;
use agora_store::{
    LogNotifier, MemoryContentRepository, MemoryProgressRepository, MemoryReactionRepository,
};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();
    let router = apply_middleware(
        create_router(),
        &config.cors,
        config.app.env.is_production(),
    );
    router.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let reaction_repo = Arc::new(MemoryReactionRepository::new());
    let content_repo = Arc::new(MemoryContentRepository::new());
    let progress_repo = Arc::new(MemoryProgressRepository::new());
    let notifier = Arc::new(LogNotifier);

    let service_context = ServiceContextBuilder::new()
        .reaction_repo(reaction_repo)
        .content_repo(content_repo)
        .progress_repo(progress_repo)
        .notifier(notifier)
        .settings(config.engagement.clone())
        .build()
        .map_err(AppError::from)?;

    Ok(AppState::new(service_context, config))
}

/// Run the API server until shutdown
pub async fn run(config: AppConfig) -> AppResult<()> {
    let address = config.api.address();
    let state = create_app_state(config)?;
    let app = create_app(state);

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind {address}: {e}")))?;

    let local_addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(e.to_string()))?;
    info!(address = %local_addr, "API server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(AppError::internal)?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
