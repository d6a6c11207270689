//! In-process notifier implementations

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use agora_core::events::EngagementEvent;
use agora_core::traits::{Notifier, NotifyError, NotifyResult};
use agora_core::value_objects::Id;

/// Notifier that records every emitted event for later inspection
#[derive(Default)]
pub struct BufferedNotifier {
    sent: Mutex<Vec<(Id, EngagementEvent)>>,
}

impl BufferedNotifier {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events emitted so far
    pub fn len(&self) -> usize {
        self.sent.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.lock().is_empty()
    }

    /// Take all buffered (recipient, event) pairs
    pub fn drain(&self) -> Vec<(Id, EngagementEvent)> {
        std::mem::take(&mut *self.sent.lock())
    }

    /// Events delivered to one recipient, in emission order
    pub fn sent_to(&self, recipient: Id) -> Vec<EngagementEvent> {
        self.sent
            .lock()
            .iter()
            .filter(|(to, _)| *to == recipient)
            .map(|(_, event)| event.clone())
            .collect()
    }
}

#[async_trait]
impl Notifier for BufferedNotifier {
    async fn emit(&self, recipient: Id, event: &EngagementEvent) -> NotifyResult<()> {
        debug!(recipient = %recipient, event = event.event_type(), "Buffering notification");
        self.sent.lock().push((recipient, event.clone()));
        Ok(())
    }
}

/// Notifier that logs every event instead of delivering it
///
/// Stand-in for the socket gateway in standalone runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn emit(&self, recipient: Id, event: &EngagementEvent) -> NotifyResult<()> {
        tracing::info!(recipient = %recipient, event = event.event_type(), "Notification emitted");
        Ok(())
    }
}

/// Notifier that drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn emit(&self, _recipient: Id, _event: &EngagementEvent) -> NotifyResult<()> {
        Ok(())
    }
}

/// Notifier that always fails, for exercising the best-effort delivery path
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn emit(&self, _recipient: Id, _event: &EngagementEvent) -> NotifyResult<()> {
        Err(NotifyError::Unavailable("socket gateway offline".to_string()))
    }
}
