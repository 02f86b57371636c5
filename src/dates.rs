//! Date-range utilities shared by the rental and maintenance services
//!
//! All comparisons against "now" treat a calendar date as its midnight UTC
//! instant, so a date equal to today already counts as past once the day has
//! started. The rental cost rule depends on `days_between` keeping its
//! ceiling semantics: June 1 to June 5 is 4 days.

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Whole days between two calendar dates, end exclusive.
///
/// Negative when `end` is before `start`; callers validate ordering first.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Whole days between two instants, rounded up.
///
/// Ceiling semantics: any partial day counts as a full day.
pub fn days_between_instants(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let delta = end - start;
    let days = delta.num_days();
    if delta > Duration::days(days) {
        days + 1
    } else {
        days
    }
}

/// Midnight UTC of a calendar date.
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc()
}

/// Whether the date's midnight lies strictly before the current instant.
pub fn is_past(date: NaiveDate) -> bool {
    midnight_utc(date) < Utc::now()
}

/// Whether `date` falls within `[today, today + days]`, both ends inclusive.
pub fn is_within_next_days(date: NaiveDate, days: i64) -> bool {
    let today = Utc::now().date_naive();
    date >= today && date <= today + Duration::days(days)
}

/// Display formatting, e.g. "Jun 1, 2025".
pub fn format_display(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
