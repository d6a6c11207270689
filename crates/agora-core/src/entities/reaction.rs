//! Reaction entity - one typed user response to one content item

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::value_objects::{ContentKind, Id, ReactionKind};

/// Reaction record
///
/// At most one record exists per (content_kind, content_id, user_id) tuple.
/// Reacting again with a different kind replaces the kind in place; reacting
/// with the same kind removes the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRecord {
    pub content_kind: ContentKind,
    pub content_id: Id,
    pub user_id: Id,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl ReactionRecord {
    /// Create a new ReactionRecord stamped with the current time
    pub fn new(content_kind: ContentKind, content_id: Id, user_id: Id, kind: ReactionKind) -> Self {
        Self {
            content_kind,
            content_id,
            user_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Aggregated per-kind reaction counts for a content item
///
/// Derived on read by grouping the stored records, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionTally {
    counts: BTreeMap<ReactionKind, i64>,
}

impl ReactionTally {
    /// Build a tally from (kind, count) pairs, dropping non-positive counts
    pub fn from_pairs(pairs: impl IntoIterator<Item = (ReactionKind, i64)>) -> Self {
        let counts = pairs.into_iter().filter(|&(_, n)| n > 0).collect();
        Self { counts }
    }

    /// Count for a single reaction kind
    pub fn get(&self, kind: ReactionKind) -> i64 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Sum of all per-kind counts
    pub fn total(&self) -> i64 {
        self.counts.values().sum()
    }

    /// Iterate over (kind, count) pairs with non-zero counts
    pub fn iter(&self) -> impl Iterator<Item = (ReactionKind, i64)> + '_ {
        self.counts.iter().map(|(&kind, &count)| (kind, count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
