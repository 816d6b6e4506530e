use chrono::{DateTime, Utc};
use serde::Serialize;

use campus_core::model::{ClassAttendance, Course, CourseId, ModuleId, UpcomingItem, UpcomingKind};

use crate::availability::ActionLabel;
use crate::presenter::{Badge, BadgeTone, countdown_label};
use crate::time_fmt::{format_slot, format_week_window};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentClassLine {
    pub name: String,
    pub when: String,
    pub instructor: String,
    pub badge: Badge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceView {
    pub percentage: u8,
    pub summary: String,
    pub recent: Vec<RecentClassLine>,
}

/// Button under an upcoming entry: either startable, or a disabled countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "text", rename_all = "kebab-case")]
pub enum UpcomingAction {
    Start(String),
    Waiting(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingEntry {
    pub id: String,
    pub kind: UpcomingKind,
    pub title: String,
    pub description: String,
    pub tag: String,
    pub when: String,
    pub action: UpcomingAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionView {
    pub module_id: ModuleId,
    pub heading: String,
    pub topic: String,
    pub next: String,
    pub call_to_action: &'static str,
}

/// Per-course landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseOverview {
    pub id: CourseId,
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub batch_name: String,
    pub duration: String,
    pub students_enrolled: String,
    pub progress: u8,
    pub position: PositionView,
    pub week_window: String,
    pub upcoming: Vec<UpcomingEntry>,
    /// Set when the course has nothing upcoming.
    pub upcoming_empty: Option<&'static str>,
    pub attendance: AttendanceView,
}

pub const NO_UPCOMING_ITEMS: &str = "No upcoming items";

/// Build the overview of `course` at `now`.
///
/// Every authored upcoming item is listed; the week window only labels the
/// panel. Progress and attendance are shown as authored; nothing here recomputes
/// them from the curriculum.
#[must_use]
pub fn build_course_overview(course: &Course, now: DateTime<Utc>) -> CourseOverview {
    let attendance = course.attendance();
    let position = course.position();
    let upcoming: Vec<UpcomingEntry> = course
        .upcoming()
        .iter()
        .map(|item| upcoming_entry(item, now))
        .collect();

    CourseOverview {
        id: course.id().clone(),
        name: course.name().to_owned(),
        description: course.description().to_owned(),
        instructor: course.instructor().name.clone(),
        batch_name: course.batch_name().to_owned(),
        duration: course.duration().to_owned(),
        students_enrolled: format!("{} enrolled", course.students_enrolled()),
        progress: course.progress(),
        position: PositionView {
            module_id: position.module_id.clone(),
            heading: format!("Current Module: {}", position.module_name),
            topic: format!("Topic: {}", position.chapter),
            next: if position.just_starting {
                format!("Next: {}", position.next.name)
            } else {
                format!("Continue with: {}", position.next.name)
            },
            call_to_action: if position.just_starting {
                "Start Learning"
            } else {
                "Continue Learning"
            },
        },
        week_window: format_week_window(now),
        upcoming_empty: upcoming.is_empty().then_some(NO_UPCOMING_ITEMS),
        upcoming,
        attendance: AttendanceView {
            percentage: attendance.percentage,
            summary: format!(
                "{} of {} classes attended",
                attendance.attended, attendance.total
            ),
            recent: attendance
                .recent_classes
                .iter()
                .map(|class| RecentClassLine {
                    name: class.name.clone(),
                    when: format_slot(class.held_at),
                    instructor: class.instructor.clone(),
                    badge: match class.status {
                        ClassAttendance::Attended => Badge::new("Present", BadgeTone::Success),
                        ClassAttendance::Absent => Badge::new("Absent", BadgeTone::Danger),
                    },
                })
                .collect(),
        },
    }
}

fn upcoming_entry(item: &UpcomingItem, now: DateTime<Utc>) -> UpcomingEntry {
    UpcomingEntry {
        id: item.id.clone(),
        kind: item.kind,
        title: item.title.clone(),
        description: item.description.clone(),
        tag: item.tag.clone(),
        when: format_slot(item.at),
        action: upcoming_action(item, now),
    }
}

// Assignments can be opened any time; classes and assessments wait for their slot.
fn upcoming_action(item: &UpcomingItem, now: DateTime<Utc>) -> UpcomingAction {
    match item.kind {
        UpcomingKind::Assignment => UpcomingAction::Start(ActionLabel::StartAssignment.to_string()),
        UpcomingKind::Assessment if now >= item.at => {
            UpcomingAction::Start(ActionLabel::StartAssessment.to_string())
        }
        UpcomingKind::Class if now >= item.at => {
            UpcomingAction::Start(ActionLabel::JoinClass.to_string())
        }
        UpcomingKind::Assessment | UpcomingKind::Class => {
            UpcomingAction::Waiting(countdown_label(item.at, now))
        }
    }
}
