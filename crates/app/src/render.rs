//! Plain-text rendering of the catalog views.
//!
//! Each renderer writes into any `fmt::Write` sink; `to_text` collects the
//! output into a `String` for printing.

use std::fmt::{self, Write};

use services::views::{
    CourseOverview, CurriculumOutline, DashboardView, ItemRow, TopicView, UpcomingAction,
};
use services::{Badge, ItemAction};

/// Run a renderer against a fresh `String`.
pub fn to_text<T>(
    view: &T,
    render: impl FnOnce(&mut String, &T) -> fmt::Result,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    render(&mut out, view)?;
    Ok(out)
}

pub fn dashboard(out: &mut impl Write, view: &DashboardView) -> fmt::Result {
    writeln!(out, "{}", view.greeting)?;
    writeln!(out, "{}", view.prompt)?;
    writeln!(out)?;

    if let Some(empty) = &view.empty_state {
        writeln!(out, "{}", empty.title)?;
        return writeln!(out, "  {}", empty.message);
    }

    for card in &view.courses {
        writeln!(out, "[{}] {}", card.id, card.name)?;
        writeln!(out, "  {}", card.description)?;
        writeln!(
            out,
            "  {} | {} | {}",
            card.instructor, card.batch_name, card.duration
        )?;
        writeln!(out, "  Progress: {}%", card.progress)?;
        for line in &card.upcoming {
            writeln!(out, "  - {} [{}] {}", line.title, line.tag, line.when)?;
        }
        writeln!(out, "  > {}", card.call_to_action.label())?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn course(out: &mut impl Write, view: &CourseOverview) -> fmt::Result {
    writeln!(out, "{} ({})", view.name, view.id)?;
    writeln!(out, "{}", view.description)?;
    writeln!(
        out,
        "Instructor: {} | Batch: {} | {} | {}",
        view.instructor, view.batch_name, view.duration, view.students_enrolled
    )?;
    writeln!(out, "Progress: {}%", view.progress)?;
    writeln!(out)?;

    writeln!(out, "{}", view.position.heading)?;
    writeln!(out, "  {}", view.position.topic)?;
    writeln!(out, "  {}", view.position.next)?;
    writeln!(out, "  > {}", view.position.call_to_action)?;
    writeln!(out)?;

    writeln!(out, "Upcoming ({})", view.week_window)?;
    if let Some(empty) = view.upcoming_empty {
        writeln!(out, "  {empty}")?;
    }
    for entry in &view.upcoming {
        writeln!(out, "  {} [{}] {}", entry.title, entry.tag, entry.when)?;
        writeln!(out, "    {}", entry.description)?;
        match &entry.action {
            UpcomingAction::Start(label) => writeln!(out, "    > {label}")?,
            UpcomingAction::Waiting(countdown) => writeln!(out, "    ({countdown})")?,
        }
    }
    writeln!(out)?;

    writeln!(
        out,
        "Attendance: {}% ({})",
        view.attendance.percentage, view.attendance.summary
    )?;
    for class in &view.attendance.recent {
        writeln!(
            out,
            "  {} {} | {} | {}",
            badge(&class.badge),
            class.name,
            class.when,
            class.instructor
        )?;
    }
    Ok(())
}

pub fn outline(out: &mut impl Write, view: &CurriculumOutline) -> fmt::Result {
    writeln!(out, "{} ({})", view.course_name, view.course_id)?;
    for module in &view.modules {
        writeln!(out, "{}", module.heading)?;
        for topic in &module.topics {
            writeln!(
                out,
                "  {}. {} ({})",
                topic.id,
                topic.name,
                topic.progress.label()
            )?;
        }
    }
    Ok(())
}

pub fn topic(out: &mut impl Write, view: &TopicView) -> fmt::Result {
    writeln!(out, "{}", view.subtitle)?;
    writeln!(out, "{}", view.title)?;
    writeln!(out, "{}", view.description)?;
    writeln!(out, "{}", view.progress_label)?;
    writeln!(out)?;
    for row in &view.rows {
        item_row(out, row)?;
    }
    Ok(())
}

fn item_row(out: &mut impl Write, row: &ItemRow) -> fmt::Result {
    let status = &row.status_view;
    let mut badges = badge(&status.badge);
    if let Some(attendance) = &status.attendance {
        badges.push(' ');
        badges.push_str(&badge(attendance));
    }
    writeln!(out, "{badges} {}", row.heading)?;

    if let Some(description) = &row.description {
        writeln!(out, "    {description}")?;
    }
    let details: Vec<String> = [
        row.duration.clone(),
        row.start_date.as_ref().map(|d| format!("Start: {d}")),
        row.end_date.as_ref().map(|d| format!("End: {d}")),
        row.due.as_ref().map(|d| format!("Due: {d}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !details.is_empty() {
        writeln!(out, "    {}", details.join(" | "))?;
    }
    if let Some(note) = status.note {
        writeln!(out, "    {note}")?;
    }
    match row.action {
        ItemAction::Enabled(label) => match &row.join_link {
            Some(link) => writeln!(out, "    > {label} {link}"),
            None => writeln!(out, "    > {label}"),
        },
        ItemAction::Disabled => writeln!(out, "    > Join Class (disabled)"),
        ItemAction::Hidden => Ok(()),
    }
}

fn badge(badge: &Badge) -> String {
    format!("[{}]", badge.text)
}
