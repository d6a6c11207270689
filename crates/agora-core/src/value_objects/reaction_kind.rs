//! Reaction kind - the closed set of reaction types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Typed user response to a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Heart,
    Haha,
    Wow,
    Support,
    Relate,
    Agree,
    Sad,
    Angry,
    Insightful,
}

impl ReactionKind {
    /// All reaction kinds, in display order
    pub const ALL: [ReactionKind; 10] = [
        ReactionKind::Like,
        ReactionKind::Heart,
        ReactionKind::Haha,
        ReactionKind::Wow,
        ReactionKind::Support,
        ReactionKind::Relate,
        ReactionKind::Agree,
        ReactionKind::Sad,
        ReactionKind::Angry,
        ReactionKind::Insightful,
    ];

    /// Wire tag for this kind
    pub const fn as_str(self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Heart => "heart",
            ReactionKind::Haha => "haha",
            ReactionKind::Wow => "wow",
            ReactionKind::Support => "support",
            ReactionKind::Relate => "relate",
            ReactionKind::Agree => "agree",
            ReactionKind::Sad => "sad",
            ReactionKind::Angry => "angry",
            ReactionKind::Insightful => "insightful",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::InvalidReactionType(s.to_string()))
    }
}
