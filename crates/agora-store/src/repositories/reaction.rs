//! In-memory implementation of ReactionRepository
//!
//! One map entry per content item holds that item's full reaction set, so
//! every mutation below happens under a single entry guard: the in-place kind
//! switch can never be observed as delete-then-insert.

use std::collections::BTreeMap;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::instrument;

use agora_core::entities::ReactionRecord;
use agora_core::traits::{ReactingUser, ReactionRepository, RepoResult};
use agora_core::value_objects::{ContentKind, Id, ReactionKind};

type ContentKey = (ContentKind, Id);

/// In-memory implementation of ReactionRepository
#[derive(Default)]
pub struct MemoryReactionRepository {
    by_content: DashMap<ContentKey, Vec<ReactionRecord>>,
}

impl MemoryReactionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReactionRepository for MemoryReactionRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        content_kind: ContentKind,
        content_id: Id,
        user_id: Id,
    ) -> RepoResult<Option<ReactionRecord>> {
        let found = self
            .by_content
            .get(&(content_kind, content_id))
            .and_then(|records| records.iter().find(|r| r.user_id == user_id).cloned());
        Ok(found)
    }

    #[instrument(skip(self, reaction), fields(content_kind = %reaction.content_kind, content_id = %reaction.content_id, user_id = %reaction.user_id))]
    async fn create(&self, reaction: &ReactionRecord) -> RepoResult<()> {
        let mut records = self
            .by_content
            .entry((reaction.content_kind, reaction.content_id))
            .or_default();

        // Duplicate create for the same user is a no-op (retry tolerance)
        if records.iter().any(|r| r.user_id == reaction.user_id) {
            return Ok(());
        }
        records.push(reaction.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_kind(
        &self,
        content_kind: ContentKind,
        content_id: Id,
        user_id: Id,
        kind: ReactionKind,
    ) -> RepoResult<()> {
        if let Some(mut records) = self.by_content.get_mut(&(content_kind, content_id)) {
            if let Some(record) = records.iter_mut().find(|r| r.user_id == user_id) {
                record.kind = kind;
            }
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        content_kind: ContentKind,
        content_id: Id,
        user_id: Id,
    ) -> RepoResult<()> {
        if let Some(mut records) = self.by_content.get_mut(&(content_kind, content_id)) {
            records.retain(|r| r.user_id != user_id);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_content(
        &self,
        content_kind: ContentKind,
        content_id: Id,
    ) -> RepoResult<Vec<ReactionRecord>> {
        Ok(self
            .by_content
            .get(&(content_kind, content_id))
            .map(|records| records.clone())
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn count_by_kind(
        &self,
        content_kind: ContentKind,
        content_id: Id,
    ) -> RepoResult<Vec<(ReactionKind, i64)>> {
        let mut counts: BTreeMap<ReactionKind, i64> = BTreeMap::new();
        if let Some(records) = self.by_content.get(&(content_kind, content_id)) {
            for record in records.iter() {
                *counts.entry(record.kind).or_insert(0) += 1;
            }
        }
        Ok(counts.into_iter().collect())
    }

    #[instrument(skip(self))]
    async fn find_reacting_users(
        &self,
        content_kind: ContentKind,
        content_id: Id,
        kind: Option<ReactionKind>,
        limit: i64,
    ) -> RepoResult<Vec<ReactingUser>> {
        let limit = usize::try_from(limit.max(0)).unwrap_or(0);
        let users = self
            .by_content
            .get(&(content_kind, content_id))
            .map(|records| {
                records
                    .iter()
                    .filter(|r| kind.is_none_or(|k| r.kind == k))
                    .take(limit)
                    .map(|r| ReactingUser {
                        user_id: r.user_id,
                        kind: r.kind,
                        reacted_at: r.created_at,
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn delete_by_content(&self, content_kind: ContentKind, content_id: Id) -> RepoResult<()> {
        self.by_content.remove(&(content_kind, content_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user: i64, kind: ReactionKind) -> ReactionRecord {
        ReactionRecord::new(ContentKind::Post, Id::new(1), Id::new(user), kind)
    }

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MemoryReactionRepository>();
    }

    #[tokio::test]
    async fn test_create_is_idempotent_per_user() {
        let repo = MemoryReactionRepository::new();
        repo.create(&record(10, ReactionKind::Like)).await.unwrap();
        repo.create(&record(10, ReactionKind::Heart)).await.unwrap();

        let stored = repo.find(ContentKind::Post, Id::new(1), Id::new(10)).await.unwrap();
        assert_eq!(stored.unwrap().kind, ReactionKind::Like);

        let all = repo.find_by_content(ContentKind::Post, Id::new(1)).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_set_kind_replaces_in_place() {
        let repo = MemoryReactionRepository::new();
        repo.create(&record(10, ReactionKind::Like)).await.unwrap();
        repo.set_kind(ContentKind::Post, Id::new(1), Id::new(10), ReactionKind::Wow)
            .await
            .unwrap();

        let counts = repo.count_by_kind(ContentKind::Post, Id::new(1)).await.unwrap();
        assert_eq!(counts, vec![(ReactionKind::Wow, 1)]);
    }

    #[tokio::test]
    async fn test_count_by_kind_groups() {
        let repo = MemoryReactionRepository::new();
        repo.create(&record(10, ReactionKind::Like)).await.unwrap();
        repo.create(&record(11, ReactionKind::Like)).await.unwrap();
        repo.create(&record(12, ReactionKind::Heart)).await.unwrap();

        let counts = repo.count_by_kind(ContentKind::Post, Id::new(1)).await.unwrap();
        assert_eq!(counts, vec![(ReactionKind::Like, 2), (ReactionKind::Heart, 1)]);
    }

    #[tokio::test]
    async fn test_reacting_users_preserve_order_and_filter() {
        let repo = MemoryReactionRepository::new();
        repo.create(&record(10, ReactionKind::Like)).await.unwrap();
        repo.create(&record(11, ReactionKind::Heart)).await.unwrap();
        repo.create(&record(12, ReactionKind::Like)).await.unwrap();

        let all = repo
            .find_reacting_users(ContentKind::Post, Id::new(1), None, 50)
            .await
            .unwrap();
        assert_eq!(
            all.iter().map(|u| u.user_id.into_inner()).collect::<Vec<_>>(),
            vec![10, 11, 12]
        );

        let likes = repo
            .find_reacting_users(ContentKind::Post, Id::new(1), Some(ReactionKind::Like), 50)
            .await
            .unwrap();
        assert_eq!(likes.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_by_content_clears_all() {
        let repo = MemoryReactionRepository::new();
        repo.create(&record(10, ReactionKind::Like)).await.unwrap();
        repo.delete_by_content(ContentKind::Post, Id::new(1)).await.unwrap();

        let all = repo.find_by_content(ContentKind::Post, Id::new(1)).await.unwrap();
        assert!(all.is_empty());
    }
}
