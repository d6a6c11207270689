//! Streak tracker
//!
//! Folds calendar-day visits into a per-user consecutive-day streak. The
//! aggregate is re-read from the store on every call; same-day repeats write
//! nothing back.

use agora_core::entities::{StreakChange, StreakState};
use agora_core::value_objects::Id;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Streak service
pub struct StreakService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StreakService<'a> {
    /// Create a new StreakService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a visit at `now` and return the updated streak
    #[instrument(skip(self))]
    pub async fn record_visit(
        &self,
        user_id: Id,
        now: DateTime<Utc>,
    ) -> ServiceResult<(StreakState, StreakChange)> {
        let progress = self.ctx.progress_repo().get(user_id).await?;
        let mut streak = progress.streak;

        let change = streak.record(now.date_naive());
        if change != StreakChange::SameDay {
            self.ctx.progress_repo().save_streak(user_id, streak).await?;
            info!(
                user_id = %user_id,
                count = streak.count,
                longest = streak.longest,
                change = ?change,
                "Visit recorded"
            );
        }

        Ok((streak, change))
    }
}
