//! API error and response plumbing
//!
//! Every failure leaves a handler as one `ApiError` and is rendered as the
//! `{ "error": { code, message } }` envelope the clients already parse.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use agora_common::AppError;
use agora_core::DomainError;
use agora_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Errors a handler can surface
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("Missing caller identity header")]
    MissingAuth,

    #[error("Invalid caller identity header")]
    InvalidAuthFormat,
}

impl ApiError {
    fn parts(&self) -> (u16, &'static str) {
        match self {
            Self::App(e) => e.parts(),
            Self::Service(e) => (e.status_code(), e.error_code()),
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
            Self::InvalidPath(_) => (400, "INVALID_PATH_PARAMETER"),
            Self::InvalidQuery(_) => (400, "INVALID_QUERY_PARAMETER"),
            Self::MissingAuth => (401, "UNAUTHENTICATED"),
            Self::InvalidAuthFormat => (401, "INVALID_IDENTITY"),
        }
    }

    /// HTTP status for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.parts().0).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Stable wire code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        self.parts().1
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }
}

/// Wire envelope for errors
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = ?self, "Request failed");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// No content response (204)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
