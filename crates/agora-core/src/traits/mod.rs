//! Ports - interfaces the infrastructure layer implements

mod notifier;
mod repositories;

pub use notifier::{Notifier, NotifyError, NotifyResult};
pub use repositories::{
    ContentRepository, ProgressRepository, ReactingUser, ReactionRepository, RepoResult,
};
