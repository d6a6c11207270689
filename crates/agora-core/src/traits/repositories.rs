//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the document store; the
//! infrastructure layer provides the implementation. The engine issues no
//! multi-document transactions: every contract here is satisfiable with
//! single-document reads, writes, and atomic sub-field increments.

use async_trait::async_trait;

use crate::entities::{ReactionRecord, StreakState, UserProgress};
use crate::error::DomainError;
use crate::value_objects::{ContentKind, CounterKind, Id, ReactionKind};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// One entry of a "who reacted" listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactingUser {
    pub user_id: Id,
    pub kind: ReactionKind,
    pub reacted_at: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the caller's reaction on a content item
    async fn find(
        &self,
        content_kind: ContentKind,
        content_id: Id,
        user_id: Id,
    ) -> RepoResult<Option<ReactionRecord>>;

    /// Store a new reaction; a concurrent duplicate for the same
    /// (content, user) pair is a no-op
    async fn create(&self, reaction: &ReactionRecord) -> RepoResult<()>;

    /// Replace the kind of an existing reaction in place
    ///
    /// Must be a single-document update so counts never transiently observe
    /// both the old and the new kind.
    async fn set_kind(
        &self,
        content_kind: ContentKind,
        content_id: Id,
        user_id: Id,
        kind: ReactionKind,
    ) -> RepoResult<()>;

    /// Remove the caller's reaction
    async fn delete(&self, content_kind: ContentKind, content_id: Id, user_id: Id)
        -> RepoResult<()>;

    /// All reactions on a content item, in creation order
    async fn find_by_content(
        &self,
        content_kind: ContentKind,
        content_id: Id,
    ) -> RepoResult<Vec<ReactionRecord>>;

    /// Count reactions grouped by kind for a content item
    async fn count_by_kind(
        &self,
        content_kind: ContentKind,
        content_id: Id,
    ) -> RepoResult<Vec<(ReactionKind, i64)>>;

    /// Users who reacted to a content item, creation order, optionally
    /// filtered by kind
    async fn find_reacting_users(
        &self,
        content_kind: ContentKind,
        content_id: Id,
        kind: Option<ReactionKind>,
        limit: i64,
    ) -> RepoResult<Vec<ReactingUser>>;

    /// Remove every reaction on a content item (content-deletion cascade)
    async fn delete_by_content(&self, content_kind: ContentKind, content_id: Id) -> RepoResult<()>;
}

// ============================================================================
// Content Repository
// ============================================================================

/// Owner lookup across all content collections
///
/// One port parameterized by `ContentKind` replaces a per-kind repository
/// family; the implementation dispatches the kind tag to the right
/// collection and owner field.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Register a content item and its owner (ingestion boundary)
    async fn register(&self, content_kind: ContentKind, content_id: Id, owner_id: Id)
        -> RepoResult<()>;

    /// Owner of a content item, or None if unknown
    async fn owner_of(&self, content_kind: ContentKind, content_id: Id) -> RepoResult<Option<Id>>;

    /// Remove a content item's registration
    async fn unregister(&self, content_kind: ContentKind, content_id: Id) -> RepoResult<()>;
}

// ============================================================================
// Progress Repository
// ============================================================================

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Full progress aggregate for a user; absent documents read as zeroed
    async fn get(&self, user_id: Id) -> RepoResult<UserProgress>;

    /// Atomically apply a signed delta to both point balances, flooring each
    /// at zero, and return the resulting balance
    async fn adjust_points(&self, user_id: Id, delta: i64)
        -> RepoResult<crate::entities::PointsBalance>;

    /// Atomically increment one action counter by 1 and return the new value
    async fn increment_counter(&self, user_id: Id, counter: CounterKind) -> RepoResult<i64>;

    /// Atomically append a badge unless already held; returns whether it was
    /// newly granted
    async fn grant_badge(&self, user_id: Id, badge: &str) -> RepoResult<bool>;

    /// Persist a user's streak state
    async fn save_streak(&self, user_id: Id, streak: StreakState) -> RepoResult<()>;
}
