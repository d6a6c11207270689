//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Ids are
//! serialized as strings for JavaScript compatibility; reaction and counter
//! tags use their wire strings.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Reaction counts plus the caller's own reaction
#[derive(Debug, Serialize)]
pub struct ReactionsResponse {
    /// Per-kind counts, zero-count kinds omitted
    pub counts: BTreeMap<String, i64>,
    pub total: i64,
    /// The caller's reaction, if any
    pub user_reaction: Option<String>,
}

/// One entry of a "who reacted" listing
#[derive(Debug, Serialize)]
pub struct ReactingUserResponse {
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub reacted_at: DateTime<Utc>,
}

/// Point balances
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub current_points: i64,
    pub total_points: i64,
}

/// Result of reporting a scored content action
#[derive(Debug, Serialize)]
pub struct ActionOutcomeResponse {
    pub current_points: i64,
    pub total_points: i64,
    pub new_badges: Vec<String>,
}

/// Per-user action counters
#[derive(Debug, Serialize)]
pub struct CountersResponse {
    pub posts: i64,
    pub answers: i64,
    pub questions: i64,
    pub comments: i64,
    pub likes: i64,
}

/// One row of the badge-progress display
#[derive(Debug, Serialize)]
pub struct PendingBadgeResponse {
    pub task: String,
    pub next_milestone: i64,
    pub badge: String,
    pub current_progress: i64,
    pub remaining: i64,
}

/// Streak display state
#[derive(Debug, Serialize)]
pub struct StreakResponse {
    pub streak_count: u32,
    pub longest_streak: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_visit_date: Option<NaiveDate>,
    pub next_milestone: u32,
}

/// Full profile progress view
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub user_id: String,
    pub points: PointsResponse,
    pub counters: CountersResponse,
    pub badges: Vec<String>,
    pub pending_badges: Vec<PendingBadgeResponse>,
    pub streak: StreakResponse,
}
