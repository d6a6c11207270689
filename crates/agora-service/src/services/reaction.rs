//! Reaction aggregator
//!
//! Computes per-kind counts for a content item, resolves the caller's own
//! reaction, and applies the toggle state machine: first reaction creates,
//! same kind removes, different kind replaces in place.

use agora_core::entities::{ReactionRecord, ReactionTally};
use agora_core::traits::ReactingUser;
use agora_core::value_objects::{ContentKind, Id, ReactionKind};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// What a toggle call did to the caller's reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// No prior reaction existed; one was created
    Added,
    /// Prior reaction had the same kind; it was removed
    Removed,
    /// Prior reaction had a different kind; the kind was replaced
    Switched,
}

/// Aggregated view of a content item's reactions for one caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionView {
    pub tally: ReactionTally,
    pub user_reaction: Option<ReactionKind>,
}

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get reaction counts and the caller's own reaction
    ///
    /// Pure read. Anonymous callers get `user_reaction = None`.
    #[instrument(skip(self))]
    pub async fn get_reactions(
        &self,
        content_kind: ContentKind,
        content_id: Id,
        caller: Option<Id>,
    ) -> ServiceResult<ReactionView> {
        let tally = self.tally(content_kind, content_id).await?;

        let user_reaction = match caller {
            Some(user_id) => self
                .ctx
                .reaction_repo()
                .find(content_kind, content_id, user_id)
                .await?
                .map(|r| r.kind),
            None => None,
        };

        Ok(ReactionView {
            tally,
            user_reaction,
        })
    }

    /// Toggle the caller's reaction on a content item
    ///
    /// The stored record is re-read immediately before mutating, so a retried
    /// or double-clicked call converges on the store's state rather than the
    /// caller's stale view.
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        content_kind: ContentKind,
        content_id: Id,
        user_id: Id,
        kind: ReactionKind,
    ) -> ServiceResult<(ToggleOutcome, ReactionView)> {
        let existing = self
            .ctx
            .reaction_repo()
            .find(content_kind, content_id, user_id)
            .await?;

        let outcome = match existing {
            None => {
                let record = ReactionRecord::new(content_kind, content_id, user_id, kind);
                self.ctx.reaction_repo().create(&record).await?;
                ToggleOutcome::Added
            }
            Some(prior) if prior.kind == kind => {
                self.ctx
                    .reaction_repo()
                    .delete(content_kind, content_id, user_id)
                    .await?;
                ToggleOutcome::Removed
            }
            Some(_) => {
                self.ctx
                    .reaction_repo()
                    .set_kind(content_kind, content_id, user_id, kind)
                    .await?;
                ToggleOutcome::Switched
            }
        };

        info!(
            content_kind = %content_kind,
            content_id = %content_id,
            user_id = %user_id,
            reaction = %kind,
            outcome = ?outcome,
            "Reaction toggled"
        );

        let tally = self.tally(content_kind, content_id).await?;
        let user_reaction = match outcome {
            ToggleOutcome::Removed => None,
            ToggleOutcome::Added | ToggleOutcome::Switched => Some(kind),
        };

        Ok((
            outcome,
            ReactionView {
                tally,
                user_reaction,
            },
        ))
    }

    /// Users who reacted to a content item, in reaction order
    #[instrument(skip(self))]
    pub async fn list_reacting_users(
        &self,
        content_kind: ContentKind,
        content_id: Id,
        kind: Option<ReactionKind>,
        limit: i64,
    ) -> ServiceResult<Vec<ReactingUser>> {
        let limit = limit.clamp(1, self.ctx.settings().reaction_user_page_limit);
        let users = self
            .ctx
            .reaction_repo()
            .find_reacting_users(content_kind, content_id, kind, limit)
            .await?;
        Ok(users)
    }

    async fn tally(&self, content_kind: ContentKind, content_id: Id) -> ServiceResult<ReactionTally> {
        let pairs = self
            .ctx
            .reaction_repo()
            .count_by_kind(content_kind, content_id)
            .await?;
        Ok(ReactionTally::from_pairs(pairs))
    }
}
