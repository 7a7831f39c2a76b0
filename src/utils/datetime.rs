//! Date utility functions
//!
//! This module provides parsing, formatting, and month-grid arithmetic for
//! the calendar widget and the search core.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

/// Standard date format used throughout the application
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    let next_month = add_months(first, 1);
    (next_month - first).num_days() as u32
}

/// Move `date` forward (or backward, for negative `delta`) by whole months,
/// clamping the day-of-month when the target month is shorter.
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + delta;
    let (year, month0) = (months.div_euclid(12), months.rem_euclid(12) as u32);
    let mut day = date.day();
    loop {
        if let Some(d) = NaiveDate::from_ymd_opt(year, month0 + 1, day) {
            return d;
        }
        day -= 1;
    }
}

/// Column (0..7) a date lands in, given the configured first day of week
pub fn weekday_column(date: NaiveDate, week_start: Weekday) -> u32 {
    (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7
}

/// Weekday header labels ordered from the configured first day of week
pub fn weekday_labels(week_start: Weekday) -> [&'static str; 7] {
    const LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
    let offset = week_start.num_days_from_monday() as usize;
    let mut out = [""; 7];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = LABELS[(offset + i) % 7];
    }
    out
}

/// "June 2024"-style title for the month containing `date`
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Parse a week-start name ("monday", "sunday", ...) into a Weekday
pub fn parse_week_start(name: &str) -> Option<Weekday> {
    match name.to_ascii_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Yesterday/today/tomorrow helper used by the status surfaces
pub fn format_relative(date: NaiveDate) -> String {
    let days_diff = (date - today()).num_days();
    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        _ => format_ymd(date),
    }
}

/// Keep `date` visible: the first displayable day not before `date` in the
/// viewed month, used when the cursor crosses a month boundary.
pub fn clamp_to_month(date: NaiveDate, month: NaiveDate) -> NaiveDate {
    let first = first_of_month(month);
    let last = first + Duration::days(days_in_month(month) as i64 - 1);
    date.clamp(first, last)
}
