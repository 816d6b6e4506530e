//! Decides which action a learning item offers at a given instant.
//!
//! Every function here is pure: the same item and the same `now` always
//! produce the same [`ItemAction`]. Callers get `now` from a [`crate::Clock`].

use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

use campus_core::model::{ItemKind, LearningItem};

/// How long before a live class starts the join button unlocks.
pub const JOIN_WINDOW_MINUTES: i64 = 10;

/// Text of an enabled action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionLabel {
    JoinClass,
    WatchRecording,
    WatchVideo,
    WatchAgain,
    ReadArticle,
    ReadAgain,
    StartAssignment,
    ViewSubmission,
    StartAssessment,
    StartQuiz,
    ViewResults,
    ShareFeedback,
    ViewFeedback,
}

impl ActionLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JoinClass => "Join Class",
            Self::WatchRecording => "Watch Recording",
            Self::WatchVideo => "Watch Video",
            Self::WatchAgain => "Watch Again",
            Self::ReadArticle => "Read Article",
            Self::ReadAgain => "Read Again",
            Self::StartAssignment => "Start Assignment",
            Self::ViewSubmission => "View Submission",
            Self::StartAssessment => "Start Assessment",
            Self::StartQuiz => "Start Quiz",
            Self::ViewResults => "View Results",
            Self::ShareFeedback => "Share Feedback",
            Self::ViewFeedback => "View Feedback",
        }
    }
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ActionLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The action affordance for one item.
///
/// `Disabled` renders a greyed-out button; `Hidden` renders no button at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "label", rename_all = "kebab-case")]
pub enum ItemAction {
    Enabled(ActionLabel),
    Disabled,
    Hidden,
}

impl ItemAction {
    #[must_use]
    pub fn label(self) -> Option<ActionLabel> {
        match self {
            Self::Enabled(label) => Some(label),
            Self::Disabled | Self::Hidden => None,
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled(_))
    }
}

/// Evaluate the primary action for `item` at `now`.
#[must_use]
pub fn evaluate_action(item: &LearningItem, now: DateTime<Utc>) -> ItemAction {
    let done = item.is_completed();
    match item.kind() {
        ItemKind::LiveClass => live_class_action(item, now),
        ItemKind::Recording => {
            if done {
                ItemAction::Enabled(ActionLabel::WatchRecording)
            } else {
                ItemAction::Hidden
            }
        }
        ItemKind::Video => {
            ItemAction::Enabled(pick(done, ActionLabel::WatchAgain, ActionLabel::WatchVideo))
        }
        ItemKind::Article => {
            ItemAction::Enabled(pick(done, ActionLabel::ReadAgain, ActionLabel::ReadArticle))
        }
        ItemKind::Assignment => ItemAction::Enabled(pick(
            done,
            ActionLabel::ViewSubmission,
            ActionLabel::StartAssignment,
        )),
        ItemKind::Assessment => opens_at_start(
            item,
            now,
            pick(done, ActionLabel::ViewResults, ActionLabel::StartAssessment),
        ),
        ItemKind::Quiz => opens_at_start(
            item,
            now,
            pick(done, ActionLabel::ViewResults, ActionLabel::StartQuiz),
        ),
        ItemKind::Feedback => {
            if feedback_open(item) {
                ItemAction::Enabled(pick(
                    done,
                    ActionLabel::ViewFeedback,
                    ActionLabel::ShareFeedback,
                ))
            } else {
                ItemAction::Hidden
            }
        }
        ItemKind::Unknown => ItemAction::Hidden,
    }
}

fn pick(done: bool, completed: ActionLabel, pending: ActionLabel) -> ActionLabel {
    if done { completed } else { pending }
}

// A future start wins over completion state.
fn live_class_action(item: &LearningItem, now: DateTime<Utc>) -> ItemAction {
    let Some(start) = item.scheduled_start() else {
        return ItemAction::Hidden;
    };

    if now >= start {
        return ItemAction::Hidden;
    }

    let opens_at = start - Duration::minutes(JOIN_WINDOW_MINUTES);
    if now >= opens_at {
        ItemAction::Enabled(ActionLabel::JoinClass)
    } else {
        ItemAction::Disabled
    }
}

fn opens_at_start(item: &LearningItem, now: DateTime<Utc>, label: ActionLabel) -> ItemAction {
    match item.scheduled_start() {
        Some(start) if now < start => ItemAction::Hidden,
        _ => ItemAction::Enabled(label),
    }
}

// TODO: gate on completion of the earlier items in the topic once that rule is agreed.
fn feedback_open(_item: &LearningItem) -> bool {
    true
}
