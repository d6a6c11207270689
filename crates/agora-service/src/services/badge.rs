//! Badge evaluator
//!
//! Increments a user's action counter and checks whether the new value lands
//! on a badge: the first-action badge at 1, a milestone badge at an exact
//! threshold. The store's membership-checked append keeps awards idempotent
//! even when an increment is replayed.

use agora_core::entities::{badge_for_count, next_target, UserProgress};
use agora_core::value_objects::{CounterKind, Id};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// One row of the "badges in progress" display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBadge {
    pub task: CounterKind,
    pub next_milestone: i64,
    pub badge: &'static str,
    pub current_progress: i64,
    pub remaining: i64,
}

/// Completed and pending badges for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub completed: Vec<String>,
    pub pending: Vec<PendingBadge>,
}

/// Badge service
pub struct BadgeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BadgeService<'a> {
    /// Create a new BadgeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record one action and return any newly earned badges
    ///
    /// This is the only place counters change, and it only ever increments.
    #[instrument(skip(self))]
    pub async fn record_action(
        &self,
        user_id: Id,
        counter: CounterKind,
    ) -> ServiceResult<Vec<String>> {
        let value = self
            .ctx
            .progress_repo()
            .increment_counter(user_id, counter)
            .await?;

        let mut earned = Vec::new();
        if let Some(badge) = badge_for_count(counter, value) {
            if self.ctx.progress_repo().grant_badge(user_id, badge).await? {
                info!(user_id = %user_id, counter = %counter, value, badge, "Badge earned");
                earned.push(badge.to_string());
            }
        }

        Ok(earned)
    }

    /// Completed and pending badges for a user's profile page
    #[instrument(skip(self))]
    pub async fn progress_snapshot(&self, user_id: Id) -> ServiceResult<ProgressSnapshot> {
        let progress = self.ctx.progress_repo().get(user_id).await?;
        Ok(Self::snapshot_of(&progress))
    }

    /// Pure snapshot over an already-loaded aggregate
    pub fn snapshot_of(progress: &UserProgress) -> ProgressSnapshot {
        let pending = CounterKind::ALL
            .into_iter()
            .filter_map(|counter| {
                let current = progress.counters.get(counter);
                next_target(counter, current).map(|(threshold, badge)| PendingBadge {
                    task: counter,
                    next_milestone: threshold,
                    badge,
                    current_progress: current,
                    remaining: threshold - current,
                })
            })
            .collect();

        ProgressSnapshot {
            completed: progress.badges.clone(),
            pending,
        }
    }
}
