//! Shared application state

use std::sync::Arc;

use agora_common::AppConfig;
use agora_service::ServiceContext;

/// State handed to every handler: the service context plus configuration
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    ctx: ServiceContext,
    config: AppConfig,
}

impl AppState {
    pub fn new(ctx: ServiceContext, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(Inner { ctx, config }),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.inner.ctx
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
