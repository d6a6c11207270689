//! Test helpers
//!
//! `TestEngine` wires a full service context over the in-memory store with a
//! buffered notifier; `TestApp` drives the Axum router in process via
//! `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

use agora_api::{create_app, create_app_state};
use agora_common::{AppConfig, AppSettings, CorsConfig, EngagementSettings, Environment, ServerConfig};
use agora_core::Id;
use agora_service::{ServiceContext, ServiceContextBuilder};
use agora_store::{
    BufferedNotifier, MemoryContentRepository, MemoryProgressRepository, MemoryReactionRepository,
};

/// In-process engine harness over the memory store
pub struct TestEngine {
    pub ctx: ServiceContext,
    pub content_repo: Arc<MemoryContentRepository>,
    pub notifier: Arc<BufferedNotifier>,
}

impl TestEngine {
    /// Build a fresh engine with default policy
    pub fn new() -> Self {
        Self::with_settings(EngagementSettings::default())
    }

    /// Build a fresh engine with a custom policy
    pub fn with_settings(settings: EngagementSettings) -> Self {
        let content_repo = Arc::new(MemoryContentRepository::new());
        let notifier = Arc::new(BufferedNotifier::new());

        let ctx = ServiceContextBuilder::new()
            .reaction_repo(Arc::new(MemoryReactionRepository::new()))
            .content_repo(Arc::clone(&content_repo) as Arc<dyn agora_core::ContentRepository>)
            .progress_repo(Arc::new(MemoryProgressRepository::new()))
            .notifier(Arc::clone(&notifier) as Arc<dyn agora_core::Notifier>)
            .settings(settings)
            .build()
            .expect("test context should build");

        Self {
            ctx,
            content_repo,
            notifier,
        }
    }
}

impl Default for TestEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for in-process API tests
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "agora-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        cors: CorsConfig::default(),
        engagement: EngagementSettings::default(),
    }
}

/// In-process HTTP harness around the full Axum application
pub struct TestApp {
    app: axum::Router,
}

impl TestApp {
    /// Build the application with a fresh in-memory state
    pub fn new() -> Result<Self> {
        let state = create_app_state(test_config())?;
        Ok(Self {
            app: create_app(state),
        })
    }

    /// Issue one request; `caller` sets the identity header
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        caller: Option<Id>,
        body: Option<Value>,
    ) -> Result<Response<Body>> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user_id) = caller {
            builder = builder.header("x-user-id", user_id.to_string());
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        Ok(self.app.clone().oneshot(request).await?)
    }

    pub async fn get(&self, uri: &str, caller: Option<Id>) -> Result<Response<Body>> {
        self.request(Method::GET, uri, caller, None).await
    }

    pub async fn post(&self, uri: &str, caller: Option<Id>, body: Value) -> Result<Response<Body>> {
        self.request(Method::POST, uri, caller, Some(body)).await
    }

    pub async fn put(&self, uri: &str, caller: Option<Id>, body: Value) -> Result<Response<Body>> {
        self.request(Method::PUT, uri, caller, Some(body)).await
    }
}

/// Assert a response status, returning the response for chaining
pub fn assert_status(response: &Response<Body>, expected: StatusCode) {
    assert_eq!(
        response.status(),
        expected,
        "unexpected status for response"
    );
}

/// Deserialize a response body as JSON
pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> Result<T> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
