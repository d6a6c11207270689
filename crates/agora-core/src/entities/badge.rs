//! Badge catalog - first-action badges and count milestones
//!
//! Thresholds are policy and must stay stable; badge ids double as display
//! labels. A badge is earned when its counter lands exactly on the threshold,
//! so retroactive table edits do not re-award past milestones.

use crate::value_objects::CounterKind;

/// One milestone in a counter's badge ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRule {
    pub threshold: i64,
    pub id: &'static str,
}

const fn rule(threshold: i64, id: &'static str) -> BadgeRule {
    BadgeRule { threshold, id }
}

const POST_MILESTONES: [BadgeRule; 6] = [
    rule(10, "Rising Writer-10 Posts"),
    rule(25, "Wordsmith-25 Posts"),
    rule(50, "Prolific Author-50 Posts"),
    rule(100, "Century Writer-100 Posts"),
    rule(200, "Master Storyteller-200 Posts"),
    rule(500, "Legendary Writer-500 Posts"),
];

const ANSWER_MILESTONES: [BadgeRule; 6] = [
    rule(10, "Helpful Mind-10 Answers"),
    rule(25, "Problem Solver-25 Answers"),
    rule(50, "Trusted Expert-50 Answers"),
    rule(100, "Knowledge Pillar-100 Answers"),
    rule(250, "Answer Machine-250 Answers"),
    rule(500, "Legendary Sage-500 Answers"),
];

const QUESTION_MILESTONES: [BadgeRule; 6] = [
    rule(5, "Curious Mind-5 Questions"),
    rule(15, "Inquisitive-15 Questions"),
    rule(30, "Seeker-30 Questions"),
    rule(50, "Question Master-50 Questions"),
    rule(100, "Deep Diver-100 Questions"),
    rule(250, "Grand Inquirer-250 Questions"),
];

const COMMENT_MILESTONES: [BadgeRule; 5] = [
    rule(20, "Conversationalist-20 Comments"),
    rule(50, "Discussion Driver-50 Comments"),
    rule(100, "Community Voice-100 Comments"),
    rule(200, "Dialogue Master-200 Comments"),
    rule(500, "Legendary Commentator-500 Comments"),
];

const LIKE_MILESTONES: [BadgeRule; 5] = [
    rule(50, "Cheerleader-50 Likes"),
    rule(100, "Encourager-100 Likes"),
    rule(250, "Morale Booster-250 Likes"),
    rule(500, "Beloved Fan-500 Likes"),
    rule(1000, "Legendary Supporter-1000 Likes"),
];

/// Badge awarded the first time a counter reaches 1
pub const fn first_badge(counter: CounterKind) -> &'static str {
    match counter {
        CounterKind::Post => "First Post",
        CounterKind::Answer => "First Answer",
        CounterKind::Question => "First Question",
        CounterKind::Comment => "First Comment",
        CounterKind::Like => "Supporter",
    }
}

/// Milestone ladder for a counter, ascending thresholds
pub const fn milestones(counter: CounterKind) -> &'static [BadgeRule] {
    match counter {
        CounterKind::Post => &POST_MILESTONES,
        CounterKind::Answer => &ANSWER_MILESTONES,
        CounterKind::Question => &QUESTION_MILESTONES,
        CounterKind::Comment => &COMMENT_MILESTONES,
        CounterKind::Like => &LIKE_MILESTONES,
    }
}

/// Badge earned by a counter landing exactly on `value`, if any
pub fn badge_for_count(counter: CounterKind, value: i64) -> Option<&'static str> {
    if value == 1 {
        return Some(first_badge(counter));
    }
    milestones(counter)
        .iter()
        .find(|r| r.threshold == value)
        .map(|r| r.id)
}

/// Next target on the ladder strictly above `value`
///
/// Returns (threshold, badge id); `None` once the ladder is exhausted.
pub fn next_target(counter: CounterKind, value: i64) -> Option<(i64, &'static str)> {
    if value < 1 {
        return Some((1, first_badge(counter)));
    }
    milestones(counter)
        .iter()
        .find(|r| r.threshold > value)
        .map(|r| (r.threshold, r.id))
}
