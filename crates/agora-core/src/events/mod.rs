//! Engagement events - emitted when engagement state changes

mod engagement_event;

pub use engagement_event::{
    BadgeEarnedBody, EngagementEvent, ReactionEventBody, StreakExtendedBody,
};
