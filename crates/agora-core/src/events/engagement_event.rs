//! Engagement events - payloads handed to the Notifier
//!
//! These are the wire shapes the socket delivery layer fans out to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ContentKind, Id, ReactionKind};

/// All engagement events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngagementEvent {
    ReactionAdded(ReactionEventBody),
    ReactionSwitched(ReactionEventBody),
    ReactionRemoved(ReactionEventBody),
    BadgeEarned(BadgeEarnedBody),
    StreakExtended(StreakExtendedBody),
}

impl EngagementEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ReactionAdded(_) => "REACTION_ADDED",
            Self::ReactionSwitched(_) => "REACTION_SWITCHED",
            Self::ReactionRemoved(_) => "REACTION_REMOVED",
            Self::BadgeEarned(_) => "BADGE_EARNED",
            Self::StreakExtended(_) => "STREAK_EXTENDED",
        }
    }
}

/// Body for reaction lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionEventBody {
    pub actor_id: Id,
    pub owner_id: Id,
    pub content_kind: ContentKind,
    pub content_id: Id,
    pub reaction: ReactionKind,
    pub occurred_at: DateTime<Utc>,
}

/// Body for badge awards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeEarnedBody {
    pub user_id: Id,
    pub badge: String,
    pub occurred_at: DateTime<Utc>,
}

/// Body for streak extensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakExtendedBody {
    pub user_id: Id,
    pub streak_count: u32,
    pub longest_streak: u32,
    pub occurred_at: DateTime<Utc>,
}
