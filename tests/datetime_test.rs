use chrono::{Duration, Local, NaiveDate, Weekday};
use rentscout::utils::datetime::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_format_ymd() {
    assert_eq!(format_ymd(date(2025, 1, 15)), "2025-01-15");
}

#[test]
fn test_parse_date_roundtrip() {
    let parsed = parse_date("2024-06-10").unwrap();
    assert_eq!(parsed, date(2024, 6, 10));
    assert_eq!(format_ymd(parsed), "2024-06-10");
    assert!(parse_date("10.06.2024").is_err());
}

#[test]
fn test_days_in_month() {
    assert_eq!(days_in_month(date(2024, 2, 15)), 29); // leap year
    assert_eq!(days_in_month(date(2025, 2, 1)), 28);
    assert_eq!(days_in_month(date(2024, 6, 30)), 30);
    assert_eq!(days_in_month(date(2024, 12, 1)), 31);
}

#[test]
fn test_add_months_clamps_short_months() {
    assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
    assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
    assert_eq!(add_months(date(2024, 6, 15), -7), date(2023, 11, 15));
    assert_eq!(add_months(date(2024, 12, 10), 1), date(2025, 1, 10));
}

#[test]
fn test_weekday_column_with_week_starts() {
    // 2024-06-10 is a Monday
    assert_eq!(weekday_column(date(2024, 6, 10), Weekday::Mon), 0);
    assert_eq!(weekday_column(date(2024, 6, 16), Weekday::Mon), 6);
    assert_eq!(weekday_column(date(2024, 6, 10), Weekday::Sun), 1);
    assert_eq!(weekday_column(date(2024, 6, 16), Weekday::Sun), 0);
}

#[test]
fn test_weekday_labels_rotate() {
    assert_eq!(weekday_labels(Weekday::Mon)[0], "Mo");
    assert_eq!(weekday_labels(Weekday::Sun)[0], "Su");
    assert_eq!(weekday_labels(Weekday::Sun)[1], "Mo");
}

#[test]
fn test_parse_week_start() {
    assert_eq!(parse_week_start("monday"), Some(Weekday::Mon));
    assert_eq!(parse_week_start("Sunday"), Some(Weekday::Sun));
    assert_eq!(parse_week_start("someday"), None);
}

#[test]
fn test_first_of_month() {
    assert_eq!(first_of_month(date(2024, 6, 17)), date(2024, 6, 1));
}

#[test]
fn test_month_title() {
    assert_eq!(month_title(date(2024, 6, 10)), "June 2024");
}

#[test]
fn test_clamp_to_month() {
    assert_eq!(clamp_to_month(date(2024, 1, 31), date(2024, 2, 1)), date(2024, 2, 29));
    assert_eq!(clamp_to_month(date(2024, 3, 5), date(2024, 2, 1)), date(2024, 2, 29));
    assert_eq!(clamp_to_month(date(2024, 2, 10), date(2024, 2, 1)), date(2024, 2, 10));
}

#[test]
fn test_format_relative() {
    let today = Local::now().date_naive();
    assert_eq!(format_relative(today), "today");
    assert_eq!(format_relative(today + Duration::days(1)), "tomorrow");
    assert_eq!(format_relative(today - Duration::days(1)), "yesterday");
    assert_eq!(format_relative(date(2020, 1, 1)), "2020-01-01");
}
