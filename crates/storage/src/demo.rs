//! Authored demo catalog.
//!
//! Schedules are expressed relative to `now` so the catalog always has a mix
//! of past classes and upcoming work, whatever day the demo runs.

use chrono::{DateTime, Duration, Utc};

use campus_core::model::{
    AttendanceOutcome, AttendanceSummary, ClassAttendance, CompletionStatus, Course, CourseDraft,
    CourseModule, CurrentPosition, EnrollmentStatus, Instructor, ItemKind, LearningItem,
    LearningItemDraft, ModuleId, NextItem, RecentClass, Student, StudentId, Topic, TopicId,
    UpcomingItem, UpcomingKind,
};

use crate::repository::{InMemoryRepository, StorageError};

fn invalid(e: impl Into<campus_core::Error>) -> StorageError {
    StorageError::Invalid(e.into().to_string())
}

fn item(draft: LearningItemDraft) -> Result<LearningItem, StorageError> {
    draft.validate().map_err(invalid)
}

fn topic(
    id: &str,
    name: &str,
    description: &str,
    items: Vec<LearningItemDraft>,
) -> Result<Topic, StorageError> {
    let items = items.into_iter().map(item).collect::<Result<Vec<_>, _>>()?;
    Ok(Topic::new(TopicId::new(id), name, description, items))
}

fn recent(id: &str, name: &str, status: ClassAttendance, at: DateTime<Utc>, by: &str) -> RecentClass {
    RecentClass {
        id: id.into(),
        name: name.into(),
        status,
        held_at: at,
        instructor: by.into(),
    }
}

fn upcoming(
    id: &str,
    kind: UpcomingKind,
    title: &str,
    description: &str,
    at: DateTime<Utc>,
    tag: &str,
) -> UpcomingItem {
    UpcomingItem {
        id: id.into(),
        kind,
        title: title.into(),
        description: description.into(),
        at,
        tag: tag.into(),
    }
}

/// Build an in-memory catalog seeded with the demo student and courses.
///
/// # Errors
///
/// Returns `StorageError::Invalid` if any authored record fails validation.
pub fn demo_catalog(now: DateTime<Utc>) -> Result<InMemoryRepository, StorageError> {
    let repo = InMemoryRepository::new();
    repo.set_student(demo_student())?;
    for course in demo_courses(now)? {
        repo.upsert_course(course)?;
    }
    Ok(repo)
}

#[must_use]
pub fn demo_student() -> Student {
    Student::new(StudentId::new("1"), "Alex Johnson", "alex.johnson@email.com")
}

/// The three demo courses: two in progress, one finished.
///
/// # Errors
///
/// Returns `StorageError::Invalid` if any authored record fails validation.
pub fn demo_courses(now: DateTime<Utc>) -> Result<Vec<Course>, StorageError> {
    Ok(vec![
        full_stack_course(now)?,
        android_course(now)?,
        data_science_course()?,
    ])
}

fn full_stack_course(now: DateTime<Utc>) -> Result<Course, StorageError> {
    let day = Duration::days(1);
    let instructor = "Dr. Sarah Chen";

    let fundamentals = CourseModule::new(
        ModuleId::new("1"),
        "JavaScript Fundamentals",
        vec![
            topic(
                "1",
                "ES6+ Features",
                "Learn modern JavaScript features including arrow functions, template literals, destructuring, and more.",
                vec![
                    LearningItemDraft::new("1-1-1", ItemKind::LiveClass, "Introduction to ES6")
                        .status(CompletionStatus::Completed)
                        .duration("90 min")
                        .scheduled_start(now - day * 7)
                        .join_link("https://meet.google.com/abc-defg-hij")
                        .attendance(AttendanceOutcome::Present),
                    LearningItemDraft::new("1-1-1-rec", ItemKind::Recording, "Introduction to ES6")
                        .status(CompletionStatus::Completed)
                        .duration("90 min"),
                    LearningItemDraft::new(
                        "1-1-2",
                        ItemKind::Video,
                        "Arrow Functions and Template Literals",
                    )
                    .status(CompletionStatus::Completed)
                    .duration("25 min"),
                    LearningItemDraft::new("1-1-3", ItemKind::Article, "Understanding Destructuring")
                        .status(CompletionStatus::Completed)
                        .duration("8 min read"),
                    LearningItemDraft::new("1-1-4", ItemKind::Assignment, "ES6 Practice Exercises")
                        .status(CompletionStatus::Completed)
                        .description("Complete a series of JavaScript exercises using ES6 features"),
                ],
            )?,
            topic(
                "2",
                "Async JavaScript",
                "Master asynchronous programming with promises, async/await, and error handling.",
                vec![
                    LearningItemDraft::new("1-2-1", ItemKind::Video, "Promises and Async/Await")
                        .status(CompletionStatus::Completed)
                        .duration("30 min"),
                ],
            )?,
        ],
    );

    let react = CourseModule::new(
        ModuleId::new("2"),
        "React Fundamentals",
        vec![topic(
            "1",
            "Getting Started with React",
            "Introduction to React library, JSX, and creating your first React application.",
            vec![
                LearningItemDraft::new("2-1-1", ItemKind::Video, "What is React?")
                    .status(CompletionStatus::Completed)
                    .duration("20 min"),
                LearningItemDraft::new("2-1-2", ItemKind::LiveClass, "Setting up React Environment")
                    .status(CompletionStatus::Completed)
                    .duration("90 min")
                    .join_link("https://meet.google.com/react-setup-123")
                    .attendance(AttendanceOutcome::Present),
            ],
        )?],
    );

    let advanced = CourseModule::new(
        ModuleId::new("3"),
        "Advanced React Concepts",
        vec![topic(
            "1",
            "Custom Hooks and Context API",
            "Learn to create reusable logic with custom hooks and manage global state with Context API.",
            vec![
                LearningItemDraft::new("3-1-1", ItemKind::Video, "Creating Custom Hooks")
                    .status(CompletionStatus::InProgress)
                    .duration("35 min"),
                LearningItemDraft::new("3-1-2", ItemKind::LiveClass, "Context API Deep Dive")
                    .duration("90 min")
                    .scheduled_start(now + day * 2)
                    .scheduled_end(now + day * 2 + Duration::minutes(90))
                    .join_link("https://meet.google.com/context-api-456"),
                LearningItemDraft::new("3-1-3", ItemKind::Assignment, "Build a Theme Switcher")
                    .description("Create a theme switcher using Context API and custom hooks")
                    .due_at(now + day * 7),
                LearningItemDraft::new("3-1-4", ItemKind::Assessment, "React Advanced Concepts Quiz")
                    .description(
                        "Test your understanding of hooks, context, and performance optimization",
                    )
                    .duration("45 min")
                    .scheduled_start(now + day * 10),
                LearningItemDraft::new("3-1-5", ItemKind::Feedback, "Module Feedback")
                    .description("Share your feedback about the Advanced React Concepts module"),
            ],
        )?],
    );

    CourseDraft {
        id: "1".into(),
        name: "Full Stack JavaScript Development".into(),
        description: "Master modern web development with React, Node.js, and MongoDB".into(),
        instructor: Instructor {
            name: instructor.into(),
        },
        progress: 68,
        status: EnrollmentStatus::Enrolled,
        batch_name: "FSB-2024-A".into(),
        duration: "6 months".into(),
        students_enrolled: 45,
        upcoming: vec![
            upcoming(
                "1",
                UpcomingKind::Class,
                "Live Class: Advanced React Patterns",
                "Learn about render props, higher-order components, and hooks patterns",
                now + day * 2,
                "Upcoming Live Class",
            ),
            upcoming(
                "2",
                UpcomingKind::Assessment,
                "Assessment: React Fundamentals Quiz",
                "Test your knowledge of React hooks, state management, and lifecycle methods",
                now + Duration::hours(12),
                "Upcoming Assessment",
            ),
            upcoming(
                "3",
                UpcomingKind::Assignment,
                "Assignment: Build a Todo App",
                "Create a fully functional todo application using React and local storage",
                now + day * 2,
                "Upcoming Assignment",
            ),
        ],
        attendance: AttendanceSummary {
            percentage: 85,
            attended: 17,
            total: 20,
            recent_classes: vec![
                recent("1", "Introduction to React Hooks", ClassAttendance::Attended, now - day, instructor),
                recent("2", "State Management Basics", ClassAttendance::Attended, now - day * 3, instructor),
                recent("3", "Component Composition", ClassAttendance::Absent, now - day * 5, instructor),
                recent("4", "JavaScript Fundamentals", ClassAttendance::Attended, now - day * 7, instructor),
                recent("5", "HTML & CSS Basics", ClassAttendance::Attended, now - day * 10, instructor),
                recent("6", "Web Development Intro", ClassAttendance::Absent, now - day * 14, instructor),
            ],
        },
        position: CurrentPosition {
            module_id: ModuleId::new("3"),
            module_name: "Advanced React Concepts".into(),
            chapter: "Custom Hooks and Context API".into(),
            item: "Creating Custom Hooks".into(),
            next: NextItem {
                kind: "video".into(),
                name: "Creating Custom Hooks".into(),
                schedule_note: Some("Available now".into()),
            },
            just_starting: false,
        },
        modules: vec![fundamentals, react, advanced],
    }
    .validate()
    .map_err(invalid)
}

fn android_course(now: DateTime<Utc>) -> Result<Course, StorageError> {
    let day = Duration::days(1);
    let instructor = "Prof. Michael Rodriguez";

    let kotlin = CourseModule::new(
        ModuleId::new("1"),
        "Kotlin Programming",
        vec![topic(
            "1",
            "Kotlin Basics",
            "Introduction to Kotlin programming language and its syntax.",
            vec![
                LearningItemDraft::new("1-1-1", ItemKind::LiveClass, "Introduction to Kotlin")
                    .status(CompletionStatus::Completed)
                    .duration("90 min")
                    .attendance(AttendanceOutcome::Present),
            ],
        )?],
    );

    let ui = CourseModule::new(
        ModuleId::new("2"),
        "Android UI Development",
        vec![topic(
            "1",
            "Layouts and Views",
            "Learn about different layout types and view components in Android.",
            vec![
                LearningItemDraft::new("2-1-1", ItemKind::Video, "Linear and Relative Layouts")
                    .status(CompletionStatus::InProgress)
                    .duration("30 min"),
            ],
        )?],
    );

    CourseDraft {
        id: "2".into(),
        name: "Android App Development with Kotlin".into(),
        description:
            "Build native Android applications using Kotlin and modern Android development tools"
                .into(),
        instructor: Instructor {
            name: instructor.into(),
        },
        progress: 35,
        status: EnrollmentStatus::Enrolled,
        batch_name: "AND-2024-B".into(),
        duration: "5 months".into(),
        students_enrolled: 38,
        upcoming: vec![upcoming(
            "1",
            UpcomingKind::Class,
            "Live Class: Activity Lifecycle",
            "Understanding Android activity lifecycle and state management",
            now + day,
            "Upcoming Live Class",
        )],
        attendance: AttendanceSummary {
            percentage: 90,
            attended: 9,
            total: 10,
            recent_classes: vec![recent(
                "1",
                "Kotlin Fundamentals",
                ClassAttendance::Attended,
                now - day * 2,
                instructor,
            )],
        },
        position: CurrentPosition {
            module_id: ModuleId::new("2"),
            module_name: "Android UI Development".into(),
            chapter: "Layouts and Views".into(),
            item: "Linear and Relative Layouts".into(),
            next: NextItem {
                kind: "live-class".into(),
                name: "Activity Lifecycle".into(),
                schedule_note: Some("Tomorrow at 3:00 PM".into()),
            },
            just_starting: false,
        },
        modules: vec![kotlin, ui],
    }
    .validate()
    .map_err(invalid)
}

fn data_science_course() -> Result<Course, StorageError> {
    CourseDraft {
        id: "3".into(),
        name: "Python for Data Science".into(),
        description: "Learn Python programming for data analysis and machine learning".into(),
        instructor: Instructor {
            name: "Dr. Emily Watson".into(),
        },
        progress: 100,
        status: EnrollmentStatus::Completed,
        batch_name: "PDS-2024-B".into(),
        duration: "4 months".into(),
        students_enrolled: 32,
        upcoming: vec![],
        attendance: AttendanceSummary {
            percentage: 95,
            attended: 19,
            total: 20,
            recent_classes: vec![],
        },
        position: CurrentPosition {
            module_id: ModuleId::new("1"),
            module_name: "Course Completed".into(),
            chapter: "All chapters completed".into(),
            item: "All content completed".into(),
            next: NextItem {
                kind: "completed".into(),
                name: "Course Certificate Available".into(),
                schedule_note: None,
            },
            just_starting: false,
        },
        modules: vec![],
    }
    .validate()
    .map_err(invalid)
}
