use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

use crate::model::ids::ItemId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ItemError {
    #[error("item id cannot be empty")]
    EmptyId,

    #[error("item title cannot be empty")]
    EmptyTitle,

    #[error("attendance can only be recorded for live classes, not {kind}")]
    AttendanceNotApplicable { kind: ItemKind },

    #[error("join link is not a valid absolute URL: {raw}")]
    InvalidJoinLink { raw: String },

    #[error("scheduled end precedes scheduled start")]
    EndBeforeStart,
}

//
// ─── ENUMS ─────────────────────────────────────────────────────────────────────
//

/// What a learning item is. Drives both the action and the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    LiveClass,
    Recording,
    Video,
    Article,
    Assignment,
    Assessment,
    Quiz,
    Feedback,
    /// Any label the catalog carries that this build does not understand.
    #[serde(other)]
    Unknown,
}

impl ItemKind {
    /// Parses a catalog label. Unrecognised labels become `Unknown`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "live-class" => Self::LiveClass,
            "recording" => Self::Recording,
            "video" => Self::Video,
            "article" => Self::Article,
            "assignment" => Self::Assignment,
            "assessment" => Self::Assessment,
            "quiz" => Self::Quiz,
            "feedback" => Self::Feedback,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LiveClass => "live-class",
            Self::Recording => "recording",
            Self::Video => "video",
            Self::Article => "article",
            Self::Assignment => "assignment",
            Self::Assessment => "assessment",
            Self::Quiz => "quiz",
            Self::Feedback => "feedback",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompletionStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl CompletionStatus {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "in-progress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => Self::NotStarted,
        }
    }

    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Whether the student attended a finished live class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceOutcome {
    Present,
    Absent,
}

//
// ─── LEARNING ITEM ─────────────────────────────────────────────────────────────
//

/// A single piece of content or activity inside a topic.
///
/// Items are built once from catalog data through [`LearningItemDraft`] and
/// are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningItem {
    id: ItemId,
    kind: ItemKind,
    title: String,
    status: CompletionStatus,
    description: Option<String>,
    duration: Option<String>,
    scheduled_start: Option<DateTime<Utc>>,
    scheduled_end: Option<DateTime<Utc>>,
    due_at: Option<DateTime<Utc>>,
    attendance: Option<AttendanceOutcome>,
    join_link: Option<Url>,
}

impl LearningItem {
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn status(&self) -> CompletionStatus {
        self.status
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Free-form duration label such as "90 min" or "8 min read".
    #[must_use]
    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    #[must_use]
    pub fn scheduled_start(&self) -> Option<DateTime<Utc>> {
        self.scheduled_start
    }

    #[must_use]
    pub fn scheduled_end(&self) -> Option<DateTime<Utc>> {
        self.scheduled_end
    }

    #[must_use]
    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    /// Attendance, reported only for completed live classes.
    #[must_use]
    pub fn attendance(&self) -> Option<AttendanceOutcome> {
        if self.kind == ItemKind::LiveClass && self.status.is_completed() {
            self.attendance
        } else {
            None
        }
    }

    #[must_use]
    pub fn join_link(&self) -> Option<&Url> {
        self.join_link.as_ref()
    }

    /// Builds the display-only recording that follows this item.
    ///
    /// The recording keeps the title and duration, is always completed,
    /// and carries no schedule, attendance, or link.
    #[must_use]
    pub fn recording_of(&self) -> LearningItem {
        LearningItem {
            id: ItemId::recording_of(&self.id),
            kind: ItemKind::Recording,
            title: self.title.clone(),
            status: CompletionStatus::Completed,
            description: None,
            duration: self.duration.clone(),
            scheduled_start: None,
            scheduled_end: None,
            due_at: None,
            attendance: None,
            join_link: None,
        }
    }
}

/// Unvalidated learning item, as authored in catalog data.
#[derive(Debug, Clone, Default)]
pub struct LearningItemDraft {
    pub id: String,
    pub kind: Option<ItemKind>,
    pub title: String,
    pub status: CompletionStatus,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub scheduled_start: Option<DateTime<Utc>>,
    pub scheduled_end: Option<DateTime<Utc>>,
    pub due_at: Option<DateTime<Utc>>,
    pub attendance: Option<AttendanceOutcome>,
    pub join_link: Option<String>,
}

impl LearningItemDraft {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: ItemKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: Some(kind),
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn status(mut self, status: CompletionStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    #[must_use]
    pub fn scheduled_start(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_start = Some(at);
        self
    }

    #[must_use]
    pub fn scheduled_end(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_end = Some(at);
        self
    }

    #[must_use]
    pub fn due_at(mut self, at: DateTime<Utc>) -> Self {
        self.due_at = Some(at);
        self
    }

    #[must_use]
    pub fn attendance(mut self, outcome: AttendanceOutcome) -> Self {
        self.attendance = Some(outcome);
        self
    }

    #[must_use]
    pub fn join_link(mut self, link: impl Into<String>) -> Self {
        self.join_link = Some(link.into());
        self
    }

    /// Validate and normalize the draft into a `LearningItem`.
    ///
    /// # Errors
    ///
    /// Returns `ItemError` when the id or title is blank, attendance is set on
    /// a non-live-class item, the join link is not a URL, or the schedule ends
    /// before it starts.
    pub fn validate(self) -> Result<LearningItem, ItemError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(ItemError::EmptyId);
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ItemError::EmptyTitle);
        }

        let kind = self.kind.unwrap_or(ItemKind::Unknown);
        if self.attendance.is_some() && kind != ItemKind::LiveClass {
            return Err(ItemError::AttendanceNotApplicable { kind });
        }

        if let (Some(start), Some(end)) = (self.scheduled_start, self.scheduled_end) {
            if end < start {
                return Err(ItemError::EndBeforeStart);
            }
        }

        let join_link = normalize_optional(self.join_link)
            .map(|raw| Url::parse(&raw).map_err(|_| ItemError::InvalidJoinLink { raw }))
            .transpose()?;

        Ok(LearningItem {
            id: ItemId::new(id),
            kind,
            title: title.to_owned(),
            status: self.status,
            description: normalize_optional(self.description),
            duration: normalize_optional(self.duration),
            scheduled_start: self.scheduled_start,
            scheduled_end: self.scheduled_end,
            due_at: self.due_at,
            attendance: self.attendance,
            join_link,
        })
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    #[test]
    fn kind_labels_round_trip_and_unknown_is_lenient() {
        assert_eq!(ItemKind::from_label("live-class"), ItemKind::LiveClass);
        assert_eq!(ItemKind::from_label("quiz"), ItemKind::Quiz);
        assert_eq!(ItemKind::from_label("podcast"), ItemKind::Unknown);
        assert_eq!(ItemKind::Feedback.to_string(), "feedback");
    }

    #[test]
    fn unknown_kind_deserializes_from_json() {
        let kind: ItemKind = serde_json::from_str("\"hologram\"").unwrap();
        assert_eq!(kind, ItemKind::Unknown);
        let kind: ItemKind = serde_json::from_str("\"live-class\"").unwrap();
        assert_eq!(kind, ItemKind::LiveClass);
    }

    #[test]
    fn status_label_defaults_to_not_started() {
        assert_eq!(CompletionStatus::from_label("completed"), CompletionStatus::Completed);
        assert_eq!(CompletionStatus::from_label("???"), CompletionStatus::NotStarted);
    }

    #[test]
    fn validate_trims_and_drops_blank_optionals() {
        let item = LearningItemDraft::new(" 1-1-2 ", ItemKind::Video, " Arrow Functions ")
            .duration("  ")
            .description("Intro")
            .validate()
            .unwrap();
        assert_eq!(item.id().as_str(), "1-1-2");
        assert_eq!(item.title(), "Arrow Functions");
        assert_eq!(item.duration(), None);
        assert_eq!(item.description(), Some("Intro"));
    }

    #[test]
    fn validate_rejects_blank_title() {
        let err = LearningItemDraft::new("x", ItemKind::Article, " ")
            .validate()
            .unwrap_err();
        assert_eq!(err, ItemError::EmptyTitle);
    }

    #[test]
    fn validate_rejects_attendance_on_video() {
        let err = LearningItemDraft::new("x", ItemKind::Video, "Clip")
            .attendance(AttendanceOutcome::Present)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ItemError::AttendanceNotApplicable {
                kind: ItemKind::Video
            }
        );
    }

    #[test]
    fn validate_rejects_end_before_start() {
        let now = fixed_now();
        let err = LearningItemDraft::new("x", ItemKind::Assessment, "Quiz")
            .scheduled_start(now)
            .scheduled_end(now - Duration::minutes(1))
            .validate()
            .unwrap_err();
        assert_eq!(err, ItemError::EndBeforeStart);
    }

    #[test]
    fn validate_rejects_relative_join_link() {
        let err = LearningItemDraft::new("x", ItemKind::LiveClass, "Class")
            .join_link("meet/abc")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ItemError::InvalidJoinLink { .. }));
    }

    #[test]
    fn attendance_hidden_until_live_class_completed() {
        let pending = LearningItemDraft::new("x", ItemKind::LiveClass, "Class")
            .attendance(AttendanceOutcome::Absent)
            .validate()
            .unwrap();
        assert_eq!(pending.attendance(), None);

        let done = LearningItemDraft::new("x", ItemKind::LiveClass, "Class")
            .status(CompletionStatus::Completed)
            .attendance(AttendanceOutcome::Absent)
            .validate()
            .unwrap();
        assert_eq!(done.attendance(), Some(AttendanceOutcome::Absent));
    }

    #[test]
    fn recording_copies_title_and_duration_only() {
        let class = LearningItemDraft::new("1-1-1", ItemKind::LiveClass, "Intro to ES6")
            .status(CompletionStatus::Completed)
            .duration("90 min")
            .scheduled_start(fixed_now())
            .attendance(AttendanceOutcome::Present)
            .join_link("https://meet.example.com/abc")
            .validate()
            .unwrap();

        let rec = class.recording_of();
        assert_eq!(rec.id().as_str(), "1-1-1-recording");
        assert_eq!(rec.kind(), ItemKind::Recording);
        assert_eq!(rec.title(), "Intro to ES6");
        assert_eq!(rec.duration(), Some("90 min"));
        assert!(rec.is_completed());
        assert_eq!(rec.scheduled_start(), None);
        assert_eq!(rec.join_link(), None);
    }
}
