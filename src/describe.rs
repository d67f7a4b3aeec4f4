//! Human-readable descriptions of cron expressions
//!
//! Common backup schedules have curated phrasing in [`KNOWN_SCHEDULES`];
//! anything else is composed from its minute, hour, day-of-month and
//! day-of-week fields. The month field never contributes to the output.

use crate::expression::parse_leading_int;

/// Curated descriptions, matched byte-for-byte before any composition
pub const KNOWN_SCHEDULES: &[(&str, &str)] = &[
    ("0 0 * * *", "Daily at midnight"),
    ("0 12 * * *", "Daily at noon"),
    ("0 1 * * *", "Daily at 1:00 AM"),
    ("0 2 * * *", "Daily at 2:00 AM"),
    ("0 3 * * *", "Daily at 3:00 AM"),
    ("0 2 * * 0", "Weekly on Sunday at 2:00 AM"),
    ("0 2 * * 1", "Weekly on Monday at 2:00 AM"),
    ("0 2 * * 2", "Weekly on Tuesday at 2:00 AM"),
    ("0 2 * * 3", "Weekly on Wednesday at 2:00 AM"),
    ("0 2 * * 4", "Weekly on Thursday at 2:00 AM"),
    ("0 2 * * 5", "Weekly on Friday at 2:00 AM"),
    ("0 2 * * 6", "Weekly on Saturday at 2:00 AM"),
    ("0 2 1 * *", "Monthly on 1st at 2:00 AM"),
    ("0 2 15 * *", "Monthly on 15th at 2:00 AM"),
];

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Rendered in place of a field that has no leading integer
const NOT_A_NUMBER: &str = "NaN";

/// Describe a cron expression in English
///
/// Returns `cron` unchanged when no description can be built.
///
/// # Examples
///
/// ```
/// use backup_schedule::describe_cron_expression;
///
/// assert_eq!(describe_cron_expression("0 0 * * *"), "Daily at midnight");
/// assert_eq!(describe_cron_expression("30 14 * * *"), "Daily at 2:30 PM");
/// assert_eq!(describe_cron_expression("0 9 * * 1"), "Weekly on Monday at 9:00 AM");
/// assert_eq!(describe_cron_expression("invalid"), "invalid");
/// ```
pub fn describe_cron_expression(cron: &str) -> String {
    if let Some(known) = lookup_known(cron) {
        return known.to_string();
    }

    let parts: Vec<&str> = cron.split(' ').collect();
    let [minute, hour, day_of_month, _month, day_of_week] = parts[..] else {
        return cron.to_string();
    };

    let has_time = minute != "*" && hour != "*";
    let time = if has_time {
        time_clause(minute, hour)
    } else {
        String::new()
    };

    let prefix = match weekday_name(day_of_week) {
        Some(name) => format!("Weekly on {} ", name),
        None if day_of_month != "*" => {
            format!("Monthly on {} ", ordinal_day(day_of_month))
        }
        None if has_time => "Daily ".to_string(),
        None => String::new(),
    };

    let description = format!("{}{}", prefix, time).trim().to_string();
    if description.is_empty() {
        tracing::debug!("No description for cron expression '{}'", cron);
        cron.to_string()
    } else {
        description
    }
}

fn lookup_known(cron: &str) -> Option<&'static str> {
    KNOWN_SCHEDULES
        .iter()
        .find(|(expr, _)| *expr == cron)
        .map(|(_, desc)| *desc)
}

/// `at H:MM AM|PM` on a 12-hour clock
fn time_clause(minute: &str, hour: &str) -> String {
    let (display_hour, period) = match parse_leading_int(hour) {
        Some(0) => ("12".to_string(), "AM"),
        Some(h) if h > 12 => ((h - 12).to_string(), "PM"),
        Some(h) => (h.to_string(), if h >= 12 { "PM" } else { "AM" }),
        None => (NOT_A_NUMBER.to_string(), "AM"),
    };
    let minute = match parse_leading_int(minute) {
        Some(m) => format!("{:02}", m),
        None => NOT_A_NUMBER.to_string(),
    };

    format!("at {}:{} {}", display_hour, minute, period)
}

fn weekday_name(field: &str) -> Option<&'static str> {
    if field == "*" {
        return None;
    }
    let day = parse_leading_int(field)?;
    usize::try_from(day)
        .ok()
        .and_then(|d| DAY_NAMES.get(d))
        .copied()
}

/// Only 1, 2 and 3 get `st`/`nd`/`rd`; every other day is `th` (so `21th`).
fn ordinal_day(field: &str) -> String {
    match parse_leading_int(field) {
        Some(day) => {
            let suffix = match day {
                1 => "st",
                2 => "nd",
                3 => "rd",
                _ => "th",
            };
            format!("{}{}", day, suffix)
        }
        None => format!("{}th", NOT_A_NUMBER),
    }
}
