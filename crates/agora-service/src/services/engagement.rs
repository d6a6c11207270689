//! Engagement dispatcher
//!
//! The one mutating boundary the HTTP layer calls. Receives "user did X to
//! content Y" events and orchestrates the aggregator, the points ledger, and
//! the badge evaluator, then hands notifications to the sink after the
//! mutations have committed. Notification failures never surface to the
//! caller.
//!
//! Toggle-off deliberately reverses nothing: removing a reaction keeps the
//! points and counters it once granted.

use agora_core::entities::{PointsBalance, StreakState};
use agora_core::events::{
    BadgeEarnedBody, EngagementEvent, ReactionEventBody, StreakExtendedBody,
};
use agora_core::value_objects::{ContentKind, CounterKind, Id, ReactionKind, ScoredAction};
use agora_core::{DomainError, StreakChange};
use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use super::badge::BadgeService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::points::PointsService;
use super::reaction::{ReactionService, ReactionView, ToggleOutcome};
use super::streak::StreakService;

/// Result of a reaction toggle, with any badges it triggered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactOutcome {
    pub outcome: ToggleOutcome,
    pub view: ReactionView,
    pub new_badges: Vec<String>,
}

/// Result of a scored content action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub points: PointsBalance,
    pub new_badges: Vec<String>,
}

/// Engagement service
pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    /// Create a new EngagementService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// React to a content item
    ///
    /// A net-new reaction (create or kind switch) scores `like` for the
    /// reacting user, feeds the like counter, and notifies the content owner
    /// when that is someone else. Toggle-off only removes the record.
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        content_kind: ContentKind,
        content_id: Id,
        user_id: Id,
        kind: ReactionKind,
    ) -> ServiceResult<ReactOutcome> {
        let owner_id = self
            .ctx
            .content_repo()
            .owner_of(content_kind, content_id)
            .await?
            .ok_or(DomainError::ContentNotFound {
                kind: content_kind,
                id: content_id,
            })?;

        let (outcome, view) = ReactionService::new(self.ctx)
            .toggle(content_kind, content_id, user_id, kind)
            .await?;

        let mut new_badges = Vec::new();
        if outcome != ToggleOutcome::Removed {
            PointsService::new(self.ctx)
                .apply(user_id, ScoredAction::Like)
                .await?;
            new_badges = BadgeService::new(self.ctx)
                .record_action(user_id, CounterKind::Like)
                .await?;
            self.notify_badges(user_id, &new_badges).await;

            if owner_id != user_id {
                let body = ReactionEventBody {
                    actor_id: user_id,
                    owner_id,
                    content_kind,
                    content_id,
                    reaction: kind,
                    occurred_at: Utc::now(),
                };
                let event = match outcome {
                    ToggleOutcome::Switched => EngagementEvent::ReactionSwitched(body),
                    _ => EngagementEvent::ReactionAdded(body),
                };
                self.notify(owner_id, &event).await;
            }
        }

        Ok(ReactOutcome {
            outcome,
            view,
            new_badges,
        })
    }

    /// Record a scored content action reported by a content handler
    ///
    /// Points always apply. Badge counters advance for every action too,
    /// delete variants included, unless the policy turns delete counting off.
    #[instrument(skip(self))]
    pub async fn record_content_action(
        &self,
        user_id: Id,
        action: ScoredAction,
    ) -> ServiceResult<ActionOutcome> {
        let points = PointsService::new(self.ctx).apply(user_id, action).await?;

        let mut new_badges = Vec::new();
        if !action.is_inverse() || self.ctx.settings().count_deletes_toward_badges {
            new_badges = BadgeService::new(self.ctx)
                .record_action(user_id, action.counter())
                .await?;
            self.notify_badges(user_id, &new_badges).await;
        }

        Ok(ActionOutcome { points, new_badges })
    }

    /// Record a visit for streak tracking
    #[instrument(skip(self))]
    pub async fn record_visit(
        &self,
        user_id: Id,
        now: DateTime<Utc>,
    ) -> ServiceResult<StreakState> {
        let (streak, change) = StreakService::new(self.ctx).record_visit(user_id, now).await?;

        if change == StreakChange::Extended {
            let event = EngagementEvent::StreakExtended(StreakExtendedBody {
                user_id,
                streak_count: streak.count,
                longest_streak: streak.longest,
                occurred_at: now,
            });
            self.notify(user_id, &event).await;
        }

        Ok(streak)
    }

    /// Drop a content item from the engine: owner registration and all
    /// reactions (content-deletion cascade)
    #[instrument(skip(self))]
    pub async fn remove_content(&self, content_kind: ContentKind, content_id: Id) -> ServiceResult<()> {
        self.ctx
            .reaction_repo()
            .delete_by_content(content_kind, content_id)
            .await?;
        self.ctx
            .content_repo()
            .unregister(content_kind, content_id)
            .await?;

        info!(content_kind = %content_kind, content_id = %content_id, "Content removed");
        Ok(())
    }

    async fn notify_badges(&self, user_id: Id, badges: &[String]) {
        for badge in badges {
            let event = EngagementEvent::BadgeEarned(BadgeEarnedBody {
                user_id,
                badge: badge.clone(),
                occurred_at: Utc::now(),
            });
            self.notify(user_id, &event).await;
        }
    }

    /// Best-effort delivery: log and move on
    async fn notify(&self, recipient: Id, event: &EngagementEvent) {
        if let Err(e) = self.ctx.notifier().emit(recipient, event).await {
            warn!(
                recipient = %recipient,
                event = event.event_type(),
                error = %e,
                "Notification delivery failed"
            );
        }
    }
}
