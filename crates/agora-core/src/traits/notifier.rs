//! Notifier port - best-effort engagement notification delivery
//!
//! Delivery is a side channel: a failed emit must never fail the mutation
//! that produced the event. Callers log and swallow errors.

use async_trait::async_trait;
use thiserror::Error;

use crate::events::EngagementEvent;
use crate::value_objects::Id;

/// Result type for notification delivery
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Notification delivery errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notification channel unavailable: {0}")]
    Unavailable(String),
}

/// Fire-and-forget notification sink
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one event to one recipient
    async fn emit(&self, recipient: Id, event: &EngagementEvent) -> NotifyResult<()>;
}
