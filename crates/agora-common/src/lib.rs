//! # agora-common
//!
//! Shared utilities: configuration loading, the application-wide error type,
//! and telemetry setup.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, EngagementSettings, Environment, ServerConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{
    init_telemetry, try_init_telemetry, LogFormat, TelemetryConfig, TelemetryError,
};
