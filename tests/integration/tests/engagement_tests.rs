//! End-to-end engine scenarios over the in-memory store
//!
//! Run with: cargo test -p integration-tests --test engagement_tests

use agora_core::{ContentKind, Id, PointsBalance, ReactionKind, ScoredAction};
use agora_service::{BadgeService, EngagementService, ReactionService, StreakService, ToggleOutcome};
use chrono::{TimeZone, Utc};
use integration_tests::{seed_content, TestEngine, ALICE, BOB, CAROL};

// ============================================================================
// Reaction toggle semantics
// ============================================================================

#[tokio::test]
async fn toggle_same_kind_twice_returns_to_baseline() {
    let engine = TestEngine::new();
    let post = seed_content(&*engine.content_repo, ContentKind::Post, 1, BOB)
        .await
        .unwrap();

    let service = EngagementService::new(&engine.ctx);
    let first = service
        .react(post.kind, post.id, ALICE, ReactionKind::Like)
        .await
        .unwrap();
    assert_eq!(first.view.tally.get(ReactionKind::Like), 1);
    assert_eq!(first.view.user_reaction, Some(ReactionKind::Like));

    let second = service
        .react(post.kind, post.id, ALICE, ReactionKind::Like)
        .await
        .unwrap();
    assert_eq!(second.outcome, ToggleOutcome::Removed);
    assert_eq!(second.view.user_reaction, None);
    assert_eq!(second.view.tally.get(ReactionKind::Like), 0);
    assert_eq!(second.view.tally.total(), 0);
}

#[tokio::test]
async fn switching_kind_replaces_without_changing_total() {
    let engine = TestEngine::new();
    let post = seed_content(&*engine.content_repo, ContentKind::Post, 1, BOB)
        .await
        .unwrap();

    let service = EngagementService::new(&engine.ctx);
    // Carol holds a like constant so the totals have a second contributor
    service
        .react(post.kind, post.id, CAROL, ReactionKind::Like)
        .await
        .unwrap();
    service
        .react(post.kind, post.id, ALICE, ReactionKind::Like)
        .await
        .unwrap();

    let switched = service
        .react(post.kind, post.id, ALICE, ReactionKind::Heart)
        .await
        .unwrap();

    assert_eq!(switched.outcome, ToggleOutcome::Switched);
    assert_eq!(switched.view.tally.total(), 2);
    assert_eq!(switched.view.tally.get(ReactionKind::Like), 1);
    assert_eq!(switched.view.tally.get(ReactionKind::Heart), 1);
    assert_eq!(switched.view.user_reaction, Some(ReactionKind::Heart));
}

#[tokio::test]
async fn one_record_per_user_no_matter_how_often_they_react() {
    let engine = TestEngine::new();
    let post = seed_content(&*engine.content_repo, ContentKind::Post, 1, BOB)
        .await
        .unwrap();

    let service = EngagementService::new(&engine.ctx);
    for kind in [
        ReactionKind::Like,
        ReactionKind::Heart,
        ReactionKind::Wow,
        ReactionKind::Insightful,
    ] {
        service.react(post.kind, post.id, ALICE, kind).await.unwrap();
    }

    let records = engine
        .ctx
        .reaction_repo()
        .find_by_content(post.kind, post.id)
        .await
        .unwrap();
    let alice_records = records.iter().filter(|r| r.user_id == ALICE).count();
    assert_eq!(alice_records, 1);
}

#[tokio::test]
async fn tally_total_equals_sum_after_arbitrary_sequence() {
    let engine = TestEngine::new();
    let story = seed_content(&*engine.content_repo, ContentKind::PersonalStory, 9, BOB)
        .await
        .unwrap();

    let service = EngagementService::new(&engine.ctx);
    let sequence = [
        (ALICE, ReactionKind::Relate),
        (BOB, ReactionKind::Support),
        (CAROL, ReactionKind::Heart),
        (ALICE, ReactionKind::Heart),   // switch
        (CAROL, ReactionKind::Heart),   // toggle off
        (BOB, ReactionKind::Support),   // toggle off
        (BOB, ReactionKind::Agree),     // re-add
    ];
    for (user, kind) in sequence {
        service.react(story.kind, story.id, user, kind).await.unwrap();
    }

    let view = ReactionService::new(&engine.ctx)
        .get_reactions(story.kind, story.id, None)
        .await
        .unwrap();
    let sum: i64 = view.tally.iter().map(|(_, n)| n).sum();
    assert_eq!(view.tally.total(), sum);
    assert_eq!(view.tally.total(), 2);
}

// ============================================================================
// Points and badges
// ============================================================================

#[tokio::test]
async fn points_floor_at_zero_from_empty_balance() {
    let engine = TestEngine::new();
    let service = EngagementService::new(&engine.ctx);

    let outcome = service
        .record_content_action(ALICE, ScoredAction::DeletePost)
        .await
        .unwrap();
    assert_eq!(outcome.points, PointsBalance { current: 0, total: 0 });
}

#[tokio::test]
async fn ten_posts_earn_first_and_milestone_badges_exactly_once() {
    let engine = TestEngine::new();
    let service = EngagementService::new(&engine.ctx);

    let mut earned = Vec::new();
    for _ in 0..10 {
        let outcome = service
            .record_content_action(ALICE, ScoredAction::Post)
            .await
            .unwrap();
        earned.extend(outcome.new_badges);
    }
    assert_eq!(
        earned,
        vec!["First Post".to_string(), "Rising Writer-10 Posts".to_string()]
    );

    let eleventh = service
        .record_content_action(ALICE, ScoredAction::Post)
        .await
        .unwrap();
    assert!(eleventh.new_badges.is_empty());

    let progress = engine.ctx.progress_repo().get(ALICE).await.unwrap();
    assert_eq!(progress.badges.len(), 2);
    assert_eq!(progress.points.current, 110);
}

#[tokio::test]
async fn unlike_keeps_scoring_symmetric_but_counter_monotonic() {
    let engine = TestEngine::new();
    let service = EngagementService::new(&engine.ctx);

    service.record_content_action(ALICE, ScoredAction::Like).await.unwrap();
    service.record_content_action(ALICE, ScoredAction::Unlike).await.unwrap();

    let progress = engine.ctx.progress_repo().get(ALICE).await.unwrap();
    assert_eq!(progress.points.current, 0);
    // The like counter moved twice: counters never decrement
    assert_eq!(progress.counters.likes, 2);
}

// ============================================================================
// Streaks
// ============================================================================

#[tokio::test]
async fn same_day_visits_do_not_move_the_streak() {
    let engine = TestEngine::new();
    let service = StreakService::new(&engine.ctx);

    let morning = Utc.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2024, 5, 1, 23, 45, 0).unwrap();

    let (first, _) = service.record_visit(ALICE, morning).await.unwrap();
    let (second, _) = service.record_visit(ALICE, evening).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(second.count, 1);
}

#[tokio::test]
async fn skipping_a_day_resets_count_but_not_longest() {
    let engine = TestEngine::new();
    let service = StreakService::new(&engine.ctx);

    for day in 1..=3 {
        let at = Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap();
        service.record_visit(ALICE, at).await.unwrap();
    }
    // Skip May 4th
    let at = Utc.with_ymd_and_hms(2024, 5, 5, 12, 0, 0).unwrap();
    let (streak, _) = service.record_visit(ALICE, at).await.unwrap();

    assert_eq!(streak.count, 1);
    assert_eq!(streak.longest, 3);
}

// ============================================================================
// Full scenario
// ============================================================================

#[tokio::test]
async fn heart_on_anothers_post_notifies_owner_and_awards_supporter() {
    let engine = TestEngine::new();
    let post = seed_content(&*engine.content_repo, ContentKind::Post, 42, BOB)
        .await
        .unwrap();

    let service = EngagementService::new(&engine.ctx);
    service
        .react(post.kind, post.id, ALICE, ReactionKind::Heart)
        .await
        .unwrap();

    // Read-back as Alice
    let view = ReactionService::new(&engine.ctx)
        .get_reactions(post.kind, post.id, Some(ALICE))
        .await
        .unwrap();
    assert_eq!(view.tally.get(ReactionKind::Heart), 1);
    assert_eq!(view.tally.total(), 1);
    assert_eq!(view.user_reaction, Some(ReactionKind::Heart));

    // Bob received exactly one reaction notification
    let bob_events = engine.notifier.sent_to(BOB);
    assert_eq!(bob_events.len(), 1);
    assert_eq!(bob_events[0].event_type(), "REACTION_ADDED");

    // Alice's like counter advanced and the first-like badge landed
    let progress = engine.ctx.progress_repo().get(ALICE).await.unwrap();
    assert_eq!(progress.counters.likes, 1);
    assert!(progress.badges.contains(&"Supporter".to_string()));

    // Alice was told about her badge
    let alice_events = engine.notifier.sent_to(ALICE);
    assert_eq!(alice_events.len(), 1);
    assert_eq!(alice_events[0].event_type(), "BADGE_EARNED");

    // Profile snapshot is consistent with the award
    let snapshot = BadgeService::new(&engine.ctx)
        .progress_snapshot(ALICE)
        .await
        .unwrap();
    assert!(snapshot.completed.contains(&"Supporter".to_string()));
    let like_row = snapshot
        .pending
        .iter()
        .find(|p| p.task == agora_core::CounterKind::Like)
        .unwrap();
    assert_eq!(like_row.next_milestone, 50);
    assert_eq!(like_row.remaining, 49);
}

#[tokio::test]
async fn id_type_distinguishes_content_kinds() {
    let engine = TestEngine::new();
    // Same numeric id registered as both an article and a video
    let article = seed_content(&*engine.content_repo, ContentKind::Article, 7, BOB)
        .await
        .unwrap();
    let video = seed_content(&*engine.content_repo, ContentKind::Video, 7, CAROL)
        .await
        .unwrap();

    let service = EngagementService::new(&engine.ctx);
    service
        .react(article.kind, article.id, ALICE, ReactionKind::Insightful)
        .await
        .unwrap();

    let video_view = ReactionService::new(&engine.ctx)
        .get_reactions(video.kind, video.id, Some(ALICE))
        .await
        .unwrap();
    assert!(video_view.tally.is_empty());
    assert_eq!(video_view.user_reaction, None);
}
