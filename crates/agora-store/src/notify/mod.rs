//! Notifier sinks
//!
//! The production socket fan-out lives outside this workspace; these sinks
//! cover local runs and tests.

mod sinks;

pub use sinks::{BufferedNotifier, FailingNotifier, LogNotifier, NullNotifier};
