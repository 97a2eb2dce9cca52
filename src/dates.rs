//! Calendar date parsing and display labels.
//!
//! Everything here works at day granularity: time-of-day is dropped on parse
//! and never used in comparisons.

use crate::error::{AppError, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Parse a stored date string, reading timestamps in the local time zone.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (`2024-01-05T10:00:00.000Z`) and
/// offset-less `YYYY-MM-DDTHH:MM:SS`. See [`parse_date_in`].
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    parse_date_in(value, &Local)
}

/// Parse a stored date string, reading timestamps in `tz`.
///
/// RFC 3339 timestamps are converted to `tz` before the calendar date is
/// taken, so they agree with a "today" from the same zone. Plain dates and
/// offset-less timestamps are already wall-clock values and are kept as is.
pub fn parse_date_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Result<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(tz).date_naive());
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.date())
        .map_err(|_| AppError::InvalidDate(value.to_string()))
}

/// Whole days from `from` to `to`. Negative when `from` is later.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Format a date as `Jan 5, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Describe how long ago `date` was relative to `today`.
pub fn relative_time(date: NaiveDate, today: NaiveDate) -> String {
    let days = days_between(date, today);

    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=29 => plural_ago(days / 7, "week"),
        30..=364 => plural_ago(days / 30, "month"),
        _ => plural_ago(days / 365, "year"),
    }
}

fn plural_ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
