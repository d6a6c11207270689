//! Service layer error type
//!
//! Most failures here are domain errors passing through; the service adds
//! only its own wiring and internal failure modes.

use agora_common::AppError;
use agora_core::DomainError;
use thiserror::Error;

/// Errors produced by the service layer
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation or store failure, surfaced unchanged
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Invalid service wiring or input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status and stable wire code for this error
    #[must_use]
    pub fn parts(&self) -> (u16, &'static str) {
        match self {
            Self::Domain(e) => {
                let status = if e.is_validation() {
                    400
                } else if e.is_unauthenticated() {
                    401
                } else if e.is_not_found() {
                    404
                } else if e.is_unavailable() {
                    503
                } else {
                    500
                };
                (status, e.code())
            }
            Self::Validation(_) => (400, "VALIDATION_ERROR"),
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
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
