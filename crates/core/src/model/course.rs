use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::curriculum::CourseModule;
use crate::model::ids::{CourseId, ModuleId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course id cannot be empty")]
    EmptyId,

    #[error("course name cannot be empty")]
    EmptyName,

    #[error("progress must be between 0 and 100, got {0}")]
    InvalidProgress(u8),

    #[error("attendance percentage must be between 0 and 100, got {0}")]
    InvalidAttendancePercentage(u8),

    #[error("attended classes ({attended}) exceed total classes ({total})")]
    AttendedExceedsTotal { attended: u32, total: u32 },
}

//
// ─── AGGREGATES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnrollmentStatus {
    Enrolled,
    Completed,
}

impl EnrollmentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enrolled => "enrolled",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassAttendance {
    Attended,
    Absent,
}

/// A past live class shown in the attendance panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentClass {
    pub id: String,
    pub name: String,
    pub status: ClassAttendance,
    pub held_at: DateTime<Utc>,
    pub instructor: String,
}

/// Attendance figures as authored for the course.
///
/// These are supplied independently and are not recomputed from the module
/// tree; `percentage` need not equal `attended / total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub percentage: u8,
    pub attended: u32,
    pub total: u32,
    pub recent_classes: Vec<RecentClass>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpcomingKind {
    Class,
    Assessment,
    Assignment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingItem {
    pub id: String,
    pub kind: UpcomingKind,
    pub title: String,
    pub description: String,
    pub at: DateTime<Utc>,
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextItem {
    /// Catalog label such as "video", "live-class" or "completed".
    pub kind: String,
    pub name: String,
    pub schedule_note: Option<String>,
}

/// Where the student currently is in the course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPosition {
    pub module_id: ModuleId,
    pub module_name: String,
    pub chapter: String,
    pub item: String,
    pub next: NextItem,
    pub just_starting: bool,
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// Unvalidated course, as authored in catalog data.
#[derive(Debug, Clone)]
pub struct CourseDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub instructor: Instructor,
    pub progress: u8,
    pub status: EnrollmentStatus,
    pub batch_name: String,
    pub duration: String,
    pub students_enrolled: u32,
    pub upcoming: Vec<UpcomingItem>,
    pub attendance: AttendanceSummary,
    pub position: CurrentPosition,
    pub modules: Vec<CourseModule>,
}

impl CourseDraft {
    /// Validate the draft into a `Course`.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` for blank identity fields or out-of-range
    /// aggregate figures.
    pub fn validate(self) -> Result<Course, CourseError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(CourseError::EmptyId);
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CourseError::EmptyName);
        }
        if self.progress > 100 {
            return Err(CourseError::InvalidProgress(self.progress));
        }
        if self.attendance.percentage > 100 {
            return Err(CourseError::InvalidAttendancePercentage(
                self.attendance.percentage,
            ));
        }
        if self.attendance.attended > self.attendance.total {
            return Err(CourseError::AttendedExceedsTotal {
                attended: self.attendance.attended,
                total: self.attendance.total,
            });
        }

        Ok(Course {
            id: CourseId::new(id),
            name: name.to_owned(),
            description: self.description,
            instructor: self.instructor,
            progress: self.progress,
            status: self.status,
            batch_name: self.batch_name,
            duration: self.duration,
            students_enrolled: self.students_enrolled,
            upcoming: self.upcoming,
            attendance: self.attendance,
            position: self.position,
            modules: self.modules,
        })
    }
}

/// A course with its curriculum and independently authored aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    name: String,
    description: String,
    instructor: Instructor,
    progress: u8,
    status: EnrollmentStatus,
    batch_name: String,
    duration: String,
    students_enrolled: u32,
    upcoming: Vec<UpcomingItem>,
    attendance: AttendanceSummary,
    position: CurrentPosition,
    modules: Vec<CourseModule>,
}

impl Course {
    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn instructor(&self) -> &Instructor {
        &self.instructor
    }

    /// Authored progress percentage (0-100).
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn status(&self) -> EnrollmentStatus {
        self.status
    }

    #[must_use]
    pub fn batch_name(&self) -> &str {
        &self.batch_name
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn students_enrolled(&self) -> u32 {
        self.students_enrolled
    }

    #[must_use]
    pub fn upcoming(&self) -> &[UpcomingItem] {
        &self.upcoming
    }

    #[must_use]
    pub fn attendance(&self) -> &AttendanceSummary {
        &self.attendance
    }

    #[must_use]
    pub fn position(&self) -> &CurrentPosition {
        &self.position
    }

    #[must_use]
    pub fn modules(&self) -> &[CourseModule] {
        &self.modules
    }

    #[must_use]
    pub fn module(&self, id: &ModuleId) -> Option<&CourseModule> {
        self.modules.iter().find(|module| module.id() == id)
    }
}
