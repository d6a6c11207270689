//! In-memory implementation of ProgressRepository
//!
//! Each user's gamification state is one document. Every mutating method
//! works through a single map entry, which is this store's equivalent of an
//! atomic `$inc`-style sub-field update: concurrent calls for the same user
//! serialize on the entry instead of racing read-modify-write cycles.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::instrument;

use agora_core::entities::{PointsBalance, StreakState, UserProgress};
use agora_core::traits::{ProgressRepository, RepoResult};
use agora_core::value_objects::{CounterKind, Id};

/// In-memory implementation of ProgressRepository
#[derive(Default)]
pub struct MemoryProgressRepository {
    users: DashMap<Id, UserProgress>,
}

impl MemoryProgressRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressRepository for MemoryProgressRepository {
    #[instrument(skip(self))]
    async fn get(&self, user_id: Id) -> RepoResult<UserProgress> {
        Ok(self
            .users
            .get(&user_id)
            .map(|p| p.clone())
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn adjust_points(&self, user_id: Id, delta: i64) -> RepoResult<PointsBalance> {
        let mut progress = self.users.entry(user_id).or_default();
        Ok(progress.points.apply(delta))
    }

    #[instrument(skip(self))]
    async fn increment_counter(&self, user_id: Id, counter: CounterKind) -> RepoResult<i64> {
        let mut progress = self.users.entry(user_id).or_default();
        Ok(progress.counters.bump(counter))
    }

    #[instrument(skip(self))]
    async fn grant_badge(&self, user_id: Id, badge: &str) -> RepoResult<bool> {
        let mut progress = self.users.entry(user_id).or_default();
        Ok(progress.grant_badge(badge))
    }

    #[instrument(skip(self))]
    async fn save_streak(&self, user_id: Id, streak: StreakState) -> RepoResult<()> {
        let mut progress = self.users.entry(user_id).or_default();
        progress.streak = streak;
        Ok(())
    }
}
