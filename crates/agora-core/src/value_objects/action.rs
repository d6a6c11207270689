//! Scored actions and badge counters
//!
//! `ScoredAction` is the vocabulary of point-bearing actions reported by the
//! platform's content handlers. The delta table is policy: the values must
//! stay stable or historical balances stop being comparable.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Point-bearing action reported by a content handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoredAction {
    Post,
    DeletePost,
    Question,
    DeleteQuestion,
    Answer,
    DeleteAnswer,
    Comment,
    DeleteComment,
    Like,
    Unlike,
}

impl ScoredAction {
    /// All scored actions
    pub const ALL: [ScoredAction; 10] = [
        ScoredAction::Post,
        ScoredAction::DeletePost,
        ScoredAction::Question,
        ScoredAction::DeleteQuestion,
        ScoredAction::Answer,
        ScoredAction::DeleteAnswer,
        ScoredAction::Comment,
        ScoredAction::DeleteComment,
        ScoredAction::Like,
        ScoredAction::Unlike,
    ];

    /// Wire tag for this action
    pub const fn as_str(self) -> &'static str {
        match self {
            ScoredAction::Post => "post",
            ScoredAction::DeletePost => "deletePost",
            ScoredAction::Question => "question",
            ScoredAction::DeleteQuestion => "deleteQuestion",
            ScoredAction::Answer => "answer",
            ScoredAction::DeleteAnswer => "deleteAnswer",
            ScoredAction::Comment => "comment",
            ScoredAction::DeleteComment => "deleteComment",
            ScoredAction::Like => "like",
            ScoredAction::Unlike => "unlike",
        }
    }

    /// Signed point delta applied to both balances
    pub const fn point_delta(self) -> i64 {
        match self {
            ScoredAction::Post => 10,
            ScoredAction::DeletePost => -10,
            ScoredAction::Question => 5,
            ScoredAction::DeleteQuestion => -5,
            ScoredAction::Answer => 15,
            ScoredAction::DeleteAnswer => -15,
            ScoredAction::Comment => 3,
            ScoredAction::DeleteComment => -3,
            ScoredAction::Like => 2,
            ScoredAction::Unlike => -2,
        }
    }

    /// Badge counter this action feeds
    pub const fn counter(self) -> CounterKind {
        match self {
            ScoredAction::Post | ScoredAction::DeletePost => CounterKind::Post,
            ScoredAction::Question | ScoredAction::DeleteQuestion => CounterKind::Question,
            ScoredAction::Answer | ScoredAction::DeleteAnswer => CounterKind::Answer,
            ScoredAction::Comment | ScoredAction::DeleteComment => CounterKind::Comment,
            ScoredAction::Like | ScoredAction::Unlike => CounterKind::Like,
        }
    }

    /// Whether this is the inverse of a creating action
    pub const fn is_inverse(self) -> bool {
        matches!(
            self,
            ScoredAction::DeletePost
                | ScoredAction::DeleteQuestion
                | ScoredAction::DeleteAnswer
                | ScoredAction::DeleteComment
                | ScoredAction::Unlike
        )
    }
}

impl fmt::Display for ScoredAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ScoredAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| DomainError::InvalidAction(s.to_string()))
    }
}

/// Per-user badge counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterKind {
    Post,
    Answer,
    Question,
    Comment,
    Like,
}

impl CounterKind {
    /// All badge counters
    pub const ALL: [CounterKind; 5] = [
        CounterKind::Post,
        CounterKind::Answer,
        CounterKind::Question,
        CounterKind::Comment,
        CounterKind::Like,
    ];

    /// Wire tag for this counter
    pub const fn as_str(self) -> &'static str {
        match self {
            CounterKind::Post => "post",
            CounterKind::Answer => "answer",
            CounterKind::Question => "question",
            CounterKind::Comment => "comment",
            CounterKind::Like => "like",
        }
    }
}

impl fmt::Display for CounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
