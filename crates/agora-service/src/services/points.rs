//! Points ledger
//!
//! Applies the fixed per-action point deltas through the store's atomic,
//! zero-floored balance adjustment.

use agora_core::entities::PointsBalance;
use agora_core::value_objects::{Id, ScoredAction};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Points service
pub struct PointsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PointsService<'a> {
    /// Create a new PointsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply one scored action to a user's balances
    #[instrument(skip(self))]
    pub async fn apply(&self, user_id: Id, action: ScoredAction) -> ServiceResult<PointsBalance> {
        let delta = action.point_delta();
        let balance = self.ctx.progress_repo().adjust_points(user_id, delta).await?;

        info!(
            user_id = %user_id,
            action = %action,
            delta,
            current = balance.current,
            total = balance.total,
            "Points applied"
        );

        Ok(balance)
    }
}
