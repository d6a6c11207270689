//! Application error type
//!
//! `AppError` is the error currency above the domain layer: services convert
//! into it, and the HTTP layer renders it from its status and wire code.

use agora_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// HTTP status and stable wire code for this error
    #[must_use]
    pub fn parts(&self) -> (u16, &'static str) {
        match self {
            Self::Domain(e) => (domain_status(e), e.code()),
            Self::Validation(_) => (400, "VALIDATION_ERROR"),
            Self::NotFound(_) => (404, "NOT_FOUND"),
            Self::Config(_) => (500, "CONFIG_ERROR"),
            Self::Internal(_) => (500, "INTERNAL_ERROR"),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.parts().0
    }

    #[must_use]
    pub fn error_code(&self) -> &'static str {
        self.parts().1
    }

    /// Wrap any error source as an internal error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Status mapping for domain errors: validation 400, missing identity 401,
/// unknown content 404, store outage 503, anything else 500
fn domain_status(err: &DomainError) -> u16 {
    if err.is_validation() {
        400
    } else if err.is_unauthenticated() {
        401
    } else if err.is_not_found() {
        404
    } else if err.is_unavailable() {
        503
    } else {
        500
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
