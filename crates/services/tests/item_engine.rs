use chrono::Duration;

use campus_core::model::{CompletionStatus, ItemKind, LearningItem, LearningItemDraft};
use campus_core::time::fixed_now;
use services::{
    ActionLabel, BadgeTone, ItemAction, countdown_label, evaluate_action, expand_items,
    present_status,
};

fn live_class(minutes_until_start: i64) -> LearningItem {
    LearningItemDraft::new("lc-1", ItemKind::LiveClass, "Ownership Deep Dive")
        .scheduled_start(fixed_now() + Duration::minutes(minutes_until_start))
        .validate()
        .unwrap()
}

#[test]
fn live_class_join_button_unlocks_ten_minutes_before_start() {
    let now = fixed_now();
    for minutes in 11..=180 {
        assert_eq!(evaluate_action(&live_class(minutes), now), ItemAction::Disabled);
    }
    for minutes in 1..=10 {
        assert_eq!(
            evaluate_action(&live_class(minutes), now),
            ItemAction::Enabled(ActionLabel::JoinClass)
        );
    }
}

#[test]
fn live_class_countdown_badge_matches_schedule() {
    let now = fixed_now();

    let day = present_status(&live_class(24 * 60), now);
    assert_eq!(day.countdown.as_deref(), Some("Starts in 1 day"));
    assert_eq!(day.badge.tone, BadgeTone::Neutral);

    let almost_day = present_status(&live_class(1439), now);
    assert_eq!(almost_day.countdown.as_deref(), Some("Starts in 23 hours"));

    assert_eq!(countdown_label(now, now), "Time passed");
}

#[test]
fn expander_inserts_exactly_one_recording_and_is_idempotent() {
    let raw = vec![
        LearningItemDraft::new("lc", ItemKind::LiveClass, "Traits")
            .status(CompletionStatus::Completed)
            .duration("60 min")
            .validate()
            .unwrap(),
        LearningItemDraft::new("v", ItemKind::Video, "Generics")
            .validate()
            .unwrap(),
    ];

    let once = expand_items(&raw);
    let summary: Vec<(&str, ItemKind, CompletionStatus, bool)> = once
        .iter()
        .map(|d| {
            (
                d.item().id().as_str(),
                d.item().kind(),
                d.item().status(),
                d.is_synthetic(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        [
            ("lc", ItemKind::LiveClass, CompletionStatus::Completed, false),
            ("lc-recording", ItemKind::Recording, CompletionStatus::Completed, true),
            ("v", ItemKind::Video, CompletionStatus::NotStarted, false),
        ]
    );

    let twice = expand_items(&once);
    assert_eq!(twice, once);
}

#[test]
fn future_assessment_renders_no_button() {
    let now = fixed_now();
    let assessment = LearningItemDraft::new("a", ItemKind::Assessment, "Borrow Checker Exam")
        .scheduled_start(now + Duration::days(1))
        .validate()
        .unwrap();
    let action = evaluate_action(&assessment, now);
    assert_eq!(action, ItemAction::Hidden);
    assert_eq!(action.label(), None);
}
