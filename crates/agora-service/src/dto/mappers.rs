//! Mappers from domain types to response DTOs

use agora_core::entities::{PointsBalance, StreakState, UserProgress};
use agora_core::traits::ReactingUser;
use agora_core::value_objects::Id;

use crate::services::{ProgressSnapshot, ReactionView};

use super::responses::{
    ActionOutcomeResponse, CountersResponse, PendingBadgeResponse, PointsResponse,
    ProgressResponse, ReactingUserResponse, ReactionsResponse, StreakResponse,
};

impl From<&ReactionView> for ReactionsResponse {
    fn from(view: &ReactionView) -> Self {
        Self {
            counts: view
                .tally
                .iter()
                .map(|(kind, count)| (kind.as_str().to_string(), count))
                .collect(),
            total: view.tally.total(),
            user_reaction: view.user_reaction.map(|k| k.as_str().to_string()),
        }
    }
}

impl From<&ReactingUser> for ReactingUserResponse {
    fn from(user: &ReactingUser) -> Self {
        Self {
            user_id: user.user_id.to_string(),
            kind: user.kind.as_str().to_string(),
            reacted_at: user.reacted_at,
        }
    }
}

impl From<PointsBalance> for PointsResponse {
    fn from(balance: PointsBalance) -> Self {
        Self {
            current_points: balance.current,
            total_points: balance.total,
        }
    }
}

impl From<&crate::services::ActionOutcome> for ActionOutcomeResponse {
    fn from(outcome: &crate::services::ActionOutcome) -> Self {
        Self {
            current_points: outcome.points.current,
            total_points: outcome.points.total,
            new_badges: outcome.new_badges.clone(),
        }
    }
}

impl From<StreakState> for StreakResponse {
    fn from(streak: StreakState) -> Self {
        Self {
            streak_count: streak.count,
            longest_streak: streak.longest,
            last_visit_date: streak.last_visit,
            next_milestone: streak.next_milestone(),
        }
    }
}

/// Assemble the full profile view from the aggregate and its snapshot
pub fn progress_response(
    user_id: Id,
    progress: &UserProgress,
    snapshot: &ProgressSnapshot,
) -> ProgressResponse {
    ProgressResponse {
        user_id: user_id.to_string(),
        points: progress.points.into(),
        counters: CountersResponse {
            posts: progress.counters.posts,
            answers: progress.counters.answers,
            questions: progress.counters.questions,
            comments: progress.counters.comments,
            likes: progress.counters.likes,
        },
        badges: snapshot.completed.clone(),
        pending_badges: snapshot
            .pending
            .iter()
            .map(|p| PendingBadgeResponse {
                task: p.task.as_str().to_string(),
                next_milestone: p.next_milestone,
                badge: p.badge.to_string(),
                current_progress: p.current_progress,
                remaining: p.remaining,
            })
            .collect(),
        streak: progress.streak.into(),
    }
}
