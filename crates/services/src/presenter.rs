//! Maps a learning item to the badge, countdown and note shown beside it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use campus_core::model::{AttendanceOutcome, CompletionStatus, ItemKind, LearningItem};

/// Shown in place of an action while a recording is not yet published.
pub const RECORDING_PENDING_NOTE: &str = "Live class recording will be available after the live class";

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Semantic colour category of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeTone {
    Success,
    Warning,
    Neutral,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: String,
    pub tone: BadgeTone,
}

impl Badge {
    #[must_use]
    pub fn new(text: impl Into<String>, tone: BadgeTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Everything the renderer needs to draw an item's status area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDescriptor {
    pub badge: Badge,
    /// Present/Absent badge for finished live classes.
    pub attendance: Option<Badge>,
    /// "Starts in ..." text for live classes that have not started.
    pub countdown: Option<String>,
    pub note: Option<&'static str>,
}

/// Present the status of `item` at `now`.
#[must_use]
pub fn present_status(item: &LearningItem, now: DateTime<Utc>) -> StatusDescriptor {
    describe_status(
        item.kind(),
        item.status(),
        item.attendance(),
        item.scheduled_start(),
        now,
    )
}

/// Present a status from its raw parts.
///
/// For live classes a future start takes precedence over completion, so an
/// upcoming class always shows its countdown.
#[must_use]
pub fn describe_status(
    kind: ItemKind,
    status: CompletionStatus,
    attendance: Option<AttendanceOutcome>,
    scheduled_start: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> StatusDescriptor {
    if kind == ItemKind::LiveClass {
        if let Some(start) = scheduled_start.filter(|start| now < *start) {
            let countdown = countdown_label(start, now);
            return StatusDescriptor {
                badge: Badge::new(countdown.clone(), BadgeTone::Neutral),
                attendance: None,
                countdown: Some(countdown),
                note: None,
            };
        }
        if status.is_completed() {
            return StatusDescriptor {
                badge: Badge::new("Completed", BadgeTone::Success),
                attendance: attendance.map(attendance_badge),
                countdown: None,
                note: None,
            };
        }
    }

    let note = (kind == ItemKind::Recording && !status.is_completed())
        .then_some(RECORDING_PENDING_NOTE);

    StatusDescriptor {
        badge: completion_badge(kind, status),
        attendance: None,
        countdown: None,
        note,
    }
}

fn completion_badge(kind: ItemKind, status: CompletionStatus) -> Badge {
    if kind == ItemKind::Unknown {
        return Badge::new("Not Started", BadgeTone::Neutral);
    }
    match status {
        CompletionStatus::Completed => {
            let text = match kind {
                ItemKind::Video => "Watched",
                ItemKind::Article => "Read",
                ItemKind::Feedback => "Feedback Shared",
                _ => "Completed",
            };
            Badge::new(text, BadgeTone::Success)
        }
        CompletionStatus::InProgress => Badge::new("In Progress", BadgeTone::Warning),
        CompletionStatus::NotStarted => Badge::new("Not Started", BadgeTone::Neutral),
    }
}

#[must_use]
pub fn attendance_badge(outcome: AttendanceOutcome) -> Badge {
    match outcome {
        AttendanceOutcome::Present => Badge::new("Present", BadgeTone::Success),
        AttendanceOutcome::Absent => Badge::new("Absent", BadgeTone::Danger),
    }
}

/// Human countdown to `start`, showing only the largest whole unit.
///
/// Returns "Time passed" once `start` is reached and "Starting soon" in the
/// final minute.
#[must_use]
pub fn countdown_label(start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = (start - now).num_milliseconds();
    if delta <= 0 {
        return "Time passed".to_owned();
    }

    let days = delta / DAY_MS;
    let hours = (delta % DAY_MS) / HOUR_MS;
    let minutes = (delta % HOUR_MS) / MINUTE_MS;

    if days > 0 {
        format!("Starts in {days} day{}", plural(days))
    } else if hours > 0 {
        format!("Starts in {hours} hour{}", plural(hours))
    } else if minutes > 0 {
        format!("Starts in {minutes} minute{}", plural(minutes))
    } else {
        "Starting soon".to_owned()
    }
}

fn plural(value: i64) -> &'static str {
    if value > 1 { "s" } else { "" }
}

/// Item heading with its kind prefix, e.g. "Live Class: Intro to ES6".
#[must_use]
pub fn display_title(item: &LearningItem) -> String {
    let prefix = match item.kind() {
        ItemKind::LiveClass => "Live Class",
        ItemKind::Recording => "Recording",
        ItemKind::Video => "Video",
        ItemKind::Article => "Article",
        ItemKind::Assignment => "Assignment",
        ItemKind::Assessment => "Assessment",
        ItemKind::Feedback => "Feedback Form",
        ItemKind::Quiz | ItemKind::Unknown => return item.title().to_owned(),
    };
    format!("{prefix}: {}", item.title())
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::model::LearningItemDraft;
    use campus_core::time::fixed_now;
    use chrono::Duration;

    fn countdown(delta: Duration) -> String {
        let now = fixed_now();
        countdown_label(now + delta, now)
    }

    #[test]
    fn countdown_boundaries() {
        assert_eq!(countdown(Duration::hours(24)), "Starts in 1 day");
        assert_eq!(countdown(Duration::minutes(1439)), "Starts in 23 hours");
        assert_eq!(countdown(Duration::days(2) + Duration::hours(5)), "Starts in 2 days");
        assert_eq!(countdown(Duration::minutes(60)), "Starts in 1 hour");
        assert_eq!(countdown(Duration::minutes(59)), "Starts in 59 minutes");
        assert_eq!(countdown(Duration::seconds(60)), "Starts in 1 minute");
        assert_eq!(countdown(Duration::seconds(59)), "Starting soon");
        assert_eq!(countdown(Duration::milliseconds(1)), "Starting soon");
    }

    #[test]
    fn countdown_at_or_after_start_is_time_passed() {
        assert_eq!(countdown(Duration::zero()), "Time passed");
        assert_eq!(countdown(Duration::minutes(-5)), "Time passed");
    }

    #[test]
    fn completed_badges_vary_by_kind() {
        let now = fixed_now();
        let cases = [
            (ItemKind::Video, "Watched"),
            (ItemKind::Article, "Read"),
            (ItemKind::Feedback, "Feedback Shared"),
            (ItemKind::Assignment, "Completed"),
            (ItemKind::Recording, "Completed"),
            (ItemKind::Quiz, "Completed"),
        ];
        for (kind, text) in cases {
            let d = describe_status(kind, CompletionStatus::Completed, None, None, now);
            assert_eq!(d.badge, Badge::new(text, BadgeTone::Success), "{kind}");
        }
    }

    #[test]
    fn in_progress_and_not_started_badges() {
        let now = fixed_now();
        let d = describe_status(ItemKind::Video, CompletionStatus::InProgress, None, None, now);
        assert_eq!(d.badge, Badge::new("In Progress", BadgeTone::Warning));
        let d = describe_status(ItemKind::Article, CompletionStatus::NotStarted, None, None, now);
        assert_eq!(d.badge, Badge::new("Not Started", BadgeTone::Neutral));
    }

    #[test]
    fn unknown_kind_defaults_to_not_started() {
        let d = describe_status(
            ItemKind::Unknown,
            CompletionStatus::Completed,
            None,
            None,
            fixed_now(),
        );
        assert_eq!(d.badge, Badge::new("Not Started", BadgeTone::Neutral));
    }

    #[test]
    fn upcoming_live_class_shows_countdown_even_if_completed() {
        let now = fixed_now();
        let d = describe_status(
            ItemKind::LiveClass,
            CompletionStatus::Completed,
            Some(AttendanceOutcome::Present),
            Some(now + Duration::days(2)),
            now,
        );
        assert_eq!(d.countdown.as_deref(), Some("Starts in 2 days"));
        assert_eq!(d.badge.tone, BadgeTone::Neutral);
        assert_eq!(d.attendance, None);
    }

    #[test]
    fn finished_live_class_reports_attendance() {
        let now = fixed_now();
        let class = LearningItemDraft::new("c", ItemKind::LiveClass, "Hooks")
            .status(CompletionStatus::Completed)
            .scheduled_start(now - Duration::days(1))
            .attendance(AttendanceOutcome::Absent)
            .validate()
            .unwrap();
        let d = present_status(&class, now);
        assert_eq!(d.badge, Badge::new("Completed", BadgeTone::Success));
        assert_eq!(d.attendance, Some(Badge::new("Absent", BadgeTone::Danger)));
        assert_eq!(d.countdown, None);
    }

    #[test]
    fn pending_live_class_without_schedule_is_generic() {
        let d = describe_status(
            ItemKind::LiveClass,
            CompletionStatus::NotStarted,
            None,
            None,
            fixed_now(),
        );
        assert_eq!(d.badge, Badge::new("Not Started", BadgeTone::Neutral));
    }

    #[test]
    fn pending_recording_carries_note() {
        let now = fixed_now();
        let d = describe_status(ItemKind::Recording, CompletionStatus::NotStarted, None, None, now);
        assert_eq!(d.note, Some(RECORDING_PENDING_NOTE));
        let d = describe_status(ItemKind::Recording, CompletionStatus::Completed, None, None, now);
        assert_eq!(d.note, None);
    }

    #[test]
    fn titles_carry_kind_prefix() {
        let feedback = LearningItemDraft::new("f", ItemKind::Feedback, "Module Feedback")
            .validate()
            .unwrap();
        let quiz = LearningItemDraft::new("q", ItemKind::Quiz, "Pop Quiz")
            .validate()
            .unwrap();
        assert_eq!(display_title(&feedback), "Feedback Form: Module Feedback");
        assert_eq!(display_title(&quiz), "Pop Quiz");
    }
}
