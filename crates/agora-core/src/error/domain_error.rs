//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ContentKind, Id};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Caller Errors
    // =========================================================================
    #[error("Unknown content type: {0}")]
    InvalidContentType(String),

    #[error("Unknown reaction type: {0}")]
    InvalidReactionType(String),

    #[error("Unknown action: {0}")]
    InvalidAction(String),

    #[error("Missing caller identity")]
    Unauthenticated,

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Content not found: {kind}/{id}")]
    ContentNotFound { kind: ContentKind, id: Id },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidContentType(_) => "INVALID_CONTENT_TYPE",
            Self::InvalidReactionType(_) => "INVALID_REACTION_TYPE",
            Self::InvalidAction(_) => "INVALID_ACTION",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::ContentNotFound { .. } => "UNKNOWN_CONTENT",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a caller validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidContentType(_) | Self::InvalidReactionType(_) | Self::InvalidAction(_)
        )
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContentNotFound { .. })
    }

    /// Check if this is a missing-identity error
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// Check if the external store was unreachable
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::InvalidReactionType("dislike".to_string());
        assert_eq!(err.code(), "INVALID_REACTION_TYPE");

        let err = DomainError::Unauthenticated;
        assert_eq!(err.code(), "UNAUTHENTICATED");
    }

    #[test]
    fn test_classifiers() {
        assert!(DomainError::InvalidAction("x".to_string()).is_validation());
        assert!(DomainError::Unauthenticated.is_unauthenticated());
        assert!(DomainError::StoreUnavailable("down".to_string()).is_unavailable());
        let not_found = DomainError::ContentNotFound {
            kind: ContentKind::Post,
            id: Id::new(1),
        };
        assert!(not_found.is_not_found());
        assert!(!not_found.is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ContentNotFound {
            kind: ContentKind::Article,
            id: Id::new(7),
        };
        assert_eq!(err.to_string(), "Content not found: article/7");
    }
}
