//! User progress aggregate - points, badge counters, badges, and streak
//!
//! All gamification state for one user lives in a single aggregate so the
//! store can apply sub-field increments under one document's atomicity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::CounterKind;

/// Spendable and lifetime point balances, each floored at zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBalance {
    pub current: i64,
    pub total: i64,
}

impl PointsBalance {
    /// Apply a signed delta to both balances, clamping each at zero
    ///
    /// The clamp is deliberate: gamification displays never go negative, even
    /// when the delta history is inconsistent.
    pub fn apply(&mut self, delta: i64) -> Self {
        self.current = (self.current + delta).max(0);
        self.total = (self.total + delta).max(0);
        *self
    }
}

/// Per-user action counters driving badge evaluation
///
/// Counters only ever increment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCounters {
    pub posts: i64,
    pub answers: i64,
    pub questions: i64,
    pub comments: i64,
    pub likes: i64,
}

impl ActionCounters {
    /// Current value of one counter
    pub fn get(&self, counter: CounterKind) -> i64 {
        match counter {
            CounterKind::Post => self.posts,
            CounterKind::Answer => self.answers,
            CounterKind::Question => self.questions,
            CounterKind::Comment => self.comments,
            CounterKind::Like => self.likes,
        }
    }

    /// Increment one counter by exactly 1, returning the new value
    pub fn bump(&mut self, counter: CounterKind) -> i64 {
        let slot = match counter {
            CounterKind::Post => &mut self.posts,
            CounterKind::Answer => &mut self.answers,
            CounterKind::Question => &mut self.questions,
            CounterKind::Comment => &mut self.comments,
            CounterKind::Like => &mut self.likes,
        };
        *slot += 1;
        *slot
    }
}

/// Consecutive-day visit milestones, for display only
pub const STREAK_MILESTONES: [u32; 8] = [3, 7, 14, 30, 60, 90, 180, 365];

/// Outcome of recording a visit against a streak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// First ever visit
    Started,
    /// Visit on the day after the last one
    Extended,
    /// Repeat visit on the same calendar day (or a backdated clock)
    SameDay,
    /// One or more days were skipped
    Reset,
}

/// Consecutive-day visit state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    pub count: u32,
    pub longest: u32,
    pub last_visit: Option<NaiveDate>,
}

impl StreakState {
    /// Fold one calendar day into the streak
    ///
    /// Same-day repeats are no-ops. A negative day delta (clock skew or a
    /// backdated call) is treated the same way rather than corrupting the
    /// streak.
    pub fn record(&mut self, today: NaiveDate) -> StreakChange {
        let Some(last) = self.last_visit else {
            self.count = 1;
            self.longest = 1;
            self.last_visit = Some(today);
            return StreakChange::Started;
        };

        let diff_days = (today - last).num_days();
        match diff_days {
            d if d <= 0 => StreakChange::SameDay,
            1 => {
                self.count += 1;
                self.longest = self.longest.max(self.count);
                self.last_visit = Some(today);
                StreakChange::Extended
            }
            _ => {
                self.count = 1;
                self.last_visit = Some(today);
                StreakChange::Reset
            }
        }
    }

    /// First milestone above the current count, or the last milestone once
    /// all are exceeded
    pub fn next_milestone(&self) -> u32 {
        STREAK_MILESTONES
            .into_iter()
            .find(|&m| m > self.count)
            .unwrap_or(STREAK_MILESTONES[STREAK_MILESTONES.len() - 1])
    }
}

/// All gamification state for one user
///
/// An absent document reads as the zeroed aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    pub points: PointsBalance,
    pub counters: ActionCounters,
    pub badges: Vec<String>,
    pub streak: StreakState,
}

impl UserProgress {
    /// Whether the user already holds a badge
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b == badge)
    }

    /// Append a badge if not already held, returning whether it was added
    pub fn grant_badge(&mut self, badge: &str) -> bool {
        if self.has_badge(badge) {
            return false;
        }
        self.badges.push(badge.to_string());
        true
    }
}
