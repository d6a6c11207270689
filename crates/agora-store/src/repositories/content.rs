//! In-memory implementation of ContentRepository
//!
//! The owning platform registers each content item with its author; the
//! engine only ever asks "who owns this".

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::instrument;

use agora_core::traits::{ContentRepository, RepoResult};
use agora_core::value_objects::{ContentKind, Id};

/// In-memory implementation of ContentRepository
#[derive(Default)]
pub struct MemoryContentRepository {
    owners: DashMap<(ContentKind, Id), Id>,
}

impl MemoryContentRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentRepository for MemoryContentRepository {
    #[instrument(skip(self))]
    async fn register(
        &self,
        content_kind: ContentKind,
        content_id: Id,
        owner_id: Id,
    ) -> RepoResult<()> {
        self.owners.insert((content_kind, content_id), owner_id);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn owner_of(&self, content_kind: ContentKind, content_id: Id) -> RepoResult<Option<Id>> {
        Ok(self.owners.get(&(content_kind, content_id)).map(|o| *o))
    }

    #[instrument(skip(self))]
    async fn unregister(&self, content_kind: ContentKind, content_id: Id) -> RepoResult<()> {
        self.owners.remove(&(content_kind, content_id));
        Ok(())
    }
}
