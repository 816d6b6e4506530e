mod course;
mod curriculum;
mod ids;
mod item;
mod student;

pub use ids::{CourseId, ItemId, ModuleId, ParseIdError, StudentId, TopicId};

pub use course::{
    AttendanceSummary, ClassAttendance, Course, CourseDraft, CourseError, CurrentPosition,
    EnrollmentStatus, Instructor, NextItem, RecentClass, UpcomingItem, UpcomingKind,
};
pub use curriculum::{CourseModule, Topic};
pub use item::{
    AttendanceOutcome, CompletionStatus, ItemError, ItemKind, LearningItem, LearningItemDraft,
};
pub use student::Student;
