//! Tracing subscriber setup
//!
//! Development runs get a human-readable subscriber with span events;
//! production runs emit JSON lines for the log pipeline. A `RUST_LOG` value
//! always wins over the profile's default filter.

use tracing_subscriber::{
    fmt, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::Environment;

/// Subscriber output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines with file/line locations
    Pretty,
    /// One JSON object per line
    Json,
}

/// Subscriber profile
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. "info"
    pub default_filter: String,
    pub format: LogFormat,
    /// Emit span open/close events (noisy; development only)
    pub span_events: bool,
}

impl TelemetryConfig {
    /// Profile matching a runtime environment
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        if env.is_development() {
            Self {
                default_filter: "debug".to_string(),
                format: LogFormat::Pretty,
                span_events: true,
            }
        } else {
            Self {
                default_filter: "info".to_string(),
                format: LogFormat::Json,
                span_events: false,
            }
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            format: LogFormat::Pretty,
            span_events: false,
        }
    }
}

/// Install the global subscriber, returning an error if one is already set
pub fn try_init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));
    let span_events = if config.span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_span_events(span_events))
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .with_span_events(span_events),
            )
            .try_init(),
    };
    installed.map_err(|_| TelemetryError::AlreadyInitialized)
}

/// Install the global subscriber
///
/// # Panics
/// Panics if a subscriber is already installed; use [`try_init_telemetry`]
/// when that is expected (tests, embedding).
pub fn init_telemetry(config: &TelemetryConfig) {
    try_init_telemetry(config).expect("global tracing subscriber already installed");
}

/// Telemetry initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("global tracing subscriber already installed")]
    AlreadyInitialized,
}
