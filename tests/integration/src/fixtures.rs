//! Test fixtures
//!
//! Deterministic ids and content seeding for engine scenarios.

use agora_core::traits::ContentRepository;
use agora_core::{ContentKind, Id};

/// Well-known test users
pub const ALICE: Id = Id::new(1001);
pub const BOB: Id = Id::new(1002);
pub const CAROL: Id = Id::new(1003);

/// A seeded content item
#[derive(Debug, Clone, Copy)]
pub struct SeededContent {
    pub kind: ContentKind,
    pub id: Id,
    pub owner: Id,
}

/// Seed a content item into a content repository
pub async fn seed_content(
    repo: &dyn ContentRepository,
    kind: ContentKind,
    id: i64,
    owner: Id,
) -> anyhow::Result<SeededContent> {
    let content_id = Id::new(id);
    repo.register(kind, content_id, owner)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(SeededContent {
        kind,
        id: content_id,
        owner,
    })
}
