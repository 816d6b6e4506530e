use chrono::{DateTime, Utc};
use serde::Serialize;

use campus_core::model::{Course, CourseId, EnrollmentStatus, Student, UpcomingKind};

use crate::time_fmt::upcoming_label;

/// Course-card button on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseCallToAction {
    ViewCourse,
    StartLearning,
    ResumeLearning,
}

impl CourseCallToAction {
    /// Completed courses are reviewed; untouched ones started; the rest resumed.
    #[must_use]
    pub fn for_course(course: &Course) -> Self {
        if course.status() == EnrollmentStatus::Completed {
            Self::ViewCourse
        } else if course.progress() == 0 {
            Self::StartLearning
        } else {
            Self::ResumeLearning
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ViewCourse => "View Course",
            Self::StartLearning => "Start Learning",
            Self::ResumeLearning => "Resume Learning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingLine {
    pub kind: UpcomingKind,
    pub title: String,
    pub tag: String,
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseCard {
    pub id: CourseId,
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub batch_name: String,
    pub duration: String,
    pub progress: u8,
    pub call_to_action: CourseCallToAction,
    pub upcoming: Vec<UpcomingLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: String,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub greeting: String,
    pub prompt: &'static str,
    pub filter: EnrollmentStatus,
    pub courses: Vec<CourseCard>,
    pub empty_state: Option<EmptyState>,
}

/// Build the student dashboard for courses matching `filter`.
#[must_use]
pub fn build_dashboard(
    student: &Student,
    courses: &[Course],
    filter: EnrollmentStatus,
    now: DateTime<Utc>,
) -> DashboardView {
    let cards: Vec<CourseCard> = courses
        .iter()
        .filter(|course| course.status() == filter)
        .map(|course| course_card(course, now))
        .collect();

    let empty_state = cards.is_empty().then(|| empty_state(filter));

    DashboardView {
        greeting: format!("Welcome back, {}!", student.name),
        prompt: "What will you be learning today?",
        filter,
        courses: cards,
        empty_state,
    }
}

fn course_card(course: &Course, now: DateTime<Utc>) -> CourseCard {
    CourseCard {
        id: course.id().clone(),
        name: course.name().to_owned(),
        description: course.description().to_owned(),
        instructor: course.instructor().name.clone(),
        batch_name: course.batch_name().to_owned(),
        duration: course.duration().to_owned(),
        progress: course.progress(),
        call_to_action: CourseCallToAction::for_course(course),
        upcoming: course
            .upcoming()
            .iter()
            .map(|item| UpcomingLine {
                kind: item.kind,
                title: item.title.clone(),
                tag: item.tag.clone(),
                when: upcoming_label(item.kind, item.at, now),
            })
            .collect(),
    }
}

fn empty_state(filter: EnrollmentStatus) -> EmptyState {
    let message = match filter {
        EnrollmentStatus::Enrolled => "You haven't enrolled in any courses yet.",
        EnrollmentStatus::Completed => "You haven't completed any courses yet.",
    };
    EmptyState {
        title: format!("No {} courses found", filter.as_str()),
        message,
    }
}
