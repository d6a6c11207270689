//! Service context - dependency container for services
//!
//! Holds the repository ports, the notifier, and the engagement policy.

use std::sync::Arc;

use agora_common::EngagementSettings;
use agora_core::traits::{ContentRepository, Notifier, ProgressRepository, ReactionRepository};

/// Service context containing all dependencies
///
/// Passed by reference to every service. Provides access to:
/// - Reaction, content, and progress repositories
/// - The notification sink
/// - Engagement policy settings
#[derive(Clone)]
pub struct ServiceContext {
    reaction_repo: Arc<dyn ReactionRepository>,
    content_repo: Arc<dyn ContentRepository>,
    progress_repo: Arc<dyn ProgressRepository>,
    notifier: Arc<dyn Notifier>,
    settings: EngagementSettings,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        reaction_repo: Arc<dyn ReactionRepository>,
        content_repo: Arc<dyn ContentRepository>,
        progress_repo: Arc<dyn ProgressRepository>,
        notifier: Arc<dyn Notifier>,
        settings: EngagementSettings,
    ) -> Self {
        Self {
            reaction_repo,
            content_repo,
            progress_repo,
            notifier,
            settings,
        }
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the content repository
    pub fn content_repo(&self) -> &dyn ContentRepository {
        self.content_repo.as_ref()
    }

    /// Get the progress repository
    pub fn progress_repo(&self) -> &dyn ProgressRepository {
        self.progress_repo.as_ref()
    }

    /// Get the notification sink
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Get the engagement policy settings
    pub fn settings(&self) -> &EngagementSettings {
        &self.settings
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("notifier", &"...")
            .field("settings", &self.settings)
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    content_repo: Option<Arc<dyn ContentRepository>>,
    progress_repo: Option<Arc<dyn ProgressRepository>>,
    notifier: Option<Arc<dyn Notifier>>,
    settings: EngagementSettings,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            reaction_repo: None,
            content_repo: None,
            progress_repo: None,
            notifier: None,
            settings: EngagementSettings::default(),
        }
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn content_repo(mut self, repo: Arc<dyn ContentRepository>) -> Self {
        self.content_repo = Some(repo);
        self
    }

    pub fn progress_repo(mut self, repo: Arc<dyn ProgressRepository>) -> Self {
        self.progress_repo = Some(repo);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn settings(mut self, settings: EngagementSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.content_repo
                .ok_or_else(|| ServiceError::validation("content_repo is required"))?,
            self.progress_repo
                .ok_or_else(|| ServiceError::validation("progress_repo is required"))?,
            self.notifier
                .ok_or_else(|| ServiceError::validation("notifier is required"))?,
            self.settings,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
