//! # agora-store
//!
//! In-memory document-store implementations of the domain ports, plus
//! notifier sinks. Each logical document (one content item's reaction set,
//! one user's progress record) is mutated under a single map entry, giving
//! the per-document atomicity the engine's concurrency model relies on.

pub mod notify;
pub mod repositories;

pub use notify::{BufferedNotifier, FailingNotifier, LogNotifier, NullNotifier};
pub use repositories::{
    MemoryContentRepository, MemoryProgressRepository, MemoryReactionRepository,
};
