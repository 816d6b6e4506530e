mod curriculum;
mod dashboard;
mod overview;

pub use curriculum::{
    CurriculumOutline, ItemRow, ModuleSummary, TopicSummary, TopicView, build_outline,
    build_topic_view,
};
pub use dashboard::{
    CourseCallToAction, CourseCard, DashboardView, EmptyState, UpcomingLine, build_dashboard,
};
pub use overview::{
    AttendanceView, CourseOverview, NO_UPCOMING_ITEMS, PositionView, RecentClassLine,
    UpcomingAction, UpcomingEntry, build_course_overview,
};
