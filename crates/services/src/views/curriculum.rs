use chrono::{DateTime, Utc};
use serde::Serialize;

use campus_core::model::{
    CompletionStatus, Course, CourseId, CourseModule, ItemId, ItemKind, ModuleId, Topic, TopicId,
};

use crate::availability::{ItemAction, evaluate_action};
use crate::expander::{DisplayItem, TopicProgress, expand_items};
use crate::presenter::{StatusDescriptor, display_title, present_status};
use crate::time_fmt::{format_schedule_date, format_slot};

//
// ─── OUTLINE ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSummary {
    pub id: TopicId,
    pub name: String,
    pub progress: TopicProgress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    pub id: ModuleId,
    pub heading: String,
    pub topics: Vec<TopicSummary>,
}

/// Module/topic navigation for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurriculumOutline {
    pub course_id: CourseId,
    pub course_name: String,
    pub modules: Vec<ModuleSummary>,
}

#[must_use]
pub fn build_outline(course: &Course) -> CurriculumOutline {
    CurriculumOutline {
        course_id: course.id().clone(),
        course_name: course.name().to_owned(),
        modules: course
            .modules()
            .iter()
            .map(|module| ModuleSummary {
                id: module.id().clone(),
                heading: format!("Module {}: {}", module.id(), module.name()),
                topics: module
                    .topics()
                    .iter()
                    .map(|topic| TopicSummary {
                        id: topic.id().clone(),
                        name: topic.name().to_owned(),
                        progress: TopicProgress::of(&expand_items(topic.items())),
                    })
                    .collect(),
            })
            .collect(),
    }
}

//
// ─── TOPIC ─────────────────────────────────────────────────────────────────────
//

/// One rendered card in the topic list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub id: ItemId,
    pub kind: ItemKind,
    pub status: CompletionStatus,
    pub heading: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub due: Option<String>,
    pub join_link: Option<String>,
    pub synthetic: bool,
    pub status_view: StatusDescriptor,
    pub action: ItemAction,
}

impl ItemRow {
    #[must_use]
    pub fn from_display(display: &DisplayItem, now: DateTime<Utc>) -> Self {
        let item = display.item();
        Self {
            id: item.id().clone(),
            kind: item.kind(),
            status: item.status(),
            heading: display_title(item),
            description: item.description().map(str::to_owned),
            duration: item.duration().map(str::to_owned),
            start_date: item.scheduled_start().map(format_schedule_date),
            end_date: item
                .scheduled_end()
                .filter(|_| item.kind() == ItemKind::Assessment)
                .map(format_schedule_date),
            due: item.due_at().map(format_slot),
            join_link: item.join_link().map(ToString::to_string),
            synthetic: display.is_synthetic(),
            status_view: present_status(item, now),
            action: evaluate_action(item, now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicView {
    pub course_id: CourseId,
    pub module_id: ModuleId,
    pub topic_id: TopicId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub progress: TopicProgress,
    pub progress_label: String,
    pub rows: Vec<ItemRow>,
}

/// Render one topic: expand its items, then evaluate each row at `now`.
#[must_use]
pub fn build_topic_view(
    course: &Course,
    module: &CourseModule,
    topic: &Topic,
    now: DateTime<Utc>,
) -> TopicView {
    let expanded = expand_items(topic.items());
    let progress = TopicProgress::of(&expanded);
    TopicView {
        course_id: course.id().clone(),
        module_id: module.id().clone(),
        topic_id: topic.id().clone(),
        title: topic.name().to_owned(),
        subtitle: format!("Module {}: {}", module.id(), module.name()),
        description: topic.description().to_owned(),
        progress,
        progress_label: progress.label(),
        rows: expanded
            .iter()
            .map(|display| ItemRow::from_display(display, now))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::ActionLabel;
    use campus_core::time::fixed_now;
    use storage::demo::demo_courses;

    fn topic_view(course_idx: usize, module: &str, topic: &str) -> TopicView {
        let now = fixed_now();
        let courses = demo_courses(now).unwrap();
        let course = &courses[course_idx];
        let module = course.module(&ModuleId::new(module)).unwrap();
        let topic = module.topic(&TopicId::new(topic)).unwrap();
        build_topic_view(course, module, topic, now)
    }

    #[test]
    fn outline_counts_expanded_items() {
        let courses = demo_courses(fixed_now()).unwrap();
        let outline = build_outline(&courses[0]);

        assert_eq!(outline.modules.len(), 3);
        assert_eq!(outline.modules[1].heading, "Module 2: React Fundamentals");
        let getting_started = &outline.modules[1].topics[0];
        assert_eq!(getting_started.progress, TopicProgress { completed: 3, total: 3 });
        let hooks = &outline.modules[2].topics[0];
        assert_eq!(hooks.progress, TopicProgress { completed: 0, total: 5 });
    }

    #[test]
    fn topic_rows_follow_expanded_order() {
        let view = topic_view(0, "2", "1");
        let ids: Vec<&str> = view.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["2-1-1", "2-1-2", "2-1-2-recording"]);
        assert!(view.rows[2].synthetic);
        assert_eq!(view.rows[2].heading, "Recording: Setting up React Environment");
        assert_eq!(
            view.rows[2].action,
            ItemAction::Enabled(ActionLabel::WatchRecording)
        );
        assert_eq!(view.progress_label, "3 of 3 completed");
        assert_eq!(view.subtitle, "Module 2: React Fundamentals");
    }

    #[test]
    fn upcoming_topic_rows_show_countdown_and_gates() {
        let view = topic_view(0, "3", "1");

        let class = &view.rows[1];
        assert_eq!(class.heading, "Live Class: Context API Deep Dive");
        assert_eq!(class.action, ItemAction::Disabled);
        assert_eq!(class.status_view.countdown.as_deref(), Some("Starts in 2 days"));
        assert_eq!(class.start_date.as_deref(), Some("Nov 16, 2023"));
        assert_eq!(
            class.join_link.as_deref(),
            Some("https://meet.google.com/context-api-456")
        );

        let assignment = &view.rows[2];
        assert_eq!(assignment.due.as_deref(), Some("Tue, Nov 21, 10:13 PM"));
        assert_eq!(
            assignment.action,
            ItemAction::Enabled(ActionLabel::StartAssignment)
        );

        let assessment = &view.rows[3];
        assert_eq!(assessment.action, ItemAction::Hidden);

        let feedback = &view.rows[4];
        assert_eq!(feedback.action, ItemAction::Enabled(ActionLabel::ShareFeedback));
    }

    #[test]
    fn topic_view_serializes_for_the_renderer() {
        let view = topic_view(0, "1", "1");
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["rows"][0]["kind"], "live-class");
        assert_eq!(json["rows"][0]["status_view"]["attendance"]["text"], "Present");
        assert_eq!(json["rows"][1]["synthetic"], true);
    }
}
