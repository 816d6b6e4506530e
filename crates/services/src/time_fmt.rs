use chrono::{DateTime, Duration, Utc};

use campus_core::model::UpcomingKind;

const HOUR_MS: i64 = 60 * 60 * 1000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// "Nov 14, 2023"
#[must_use]
pub fn format_schedule_date(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// "Tue, Nov 14, 10:13 PM"
#[must_use]
pub fn format_slot(value: DateTime<Utc>) -> String {
    value.format("%a, %b %-d, %-I:%M %p").to_string()
}

/// "From Nov 14 to Nov 21": today through the same day next week.
#[must_use]
pub fn format_week_window(now: DateTime<Utc>) -> String {
    let end = now + Duration::days(7);
    format!("From {} to {}", now.format("%b %-d"), end.format("%b %-d"))
}

/// Relative label for a dashboard upcoming item, e.g. "Due in 2 days".
///
/// Under a day the hours are rounded up, otherwise the days are.
#[must_use]
pub fn upcoming_label(kind: UpcomingKind, at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (at - now).num_milliseconds();
    if diff <= 0 {
        return match kind {
            UpcomingKind::Assignment => "Past due".to_owned(),
            UpcomingKind::Class | UpcomingKind::Assessment => "Already started".to_owned(),
        };
    }

    let verb = match kind {
        UpcomingKind::Assignment => "Due",
        UpcomingKind::Class | UpcomingKind::Assessment => "Starts",
    };
    let hours = ceil_div(diff, HOUR_MS);
    if hours < 24 {
        format!("{verb} in {hours} hour{}", plural(hours))
    } else {
        let days = ceil_div(diff, DAY_MS);
        format!("{verb} in {days} day{}", plural(days))
    }
}

fn plural(value: i64) -> &'static str {
    if value == 1 { "" } else { "s" }
}

fn ceil_div(value: i64, unit: i64) -> i64 {
    (value + unit - 1) / unit
}
