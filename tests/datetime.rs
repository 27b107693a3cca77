use bandstand::utils::datetime::*;
use chrono::{Duration, TimeZone, Utc};

#[test]
fn test_parse_timestamp_iso_delimiters() {
    let parsed = parse_timestamp("2023-05-10T14:30:00.000").unwrap();
    let expected = Utc.with_ymd_and_hms(2023, 5, 10, 14, 30, 0).unwrap();
    assert_eq!(parsed, expected);
}

#[test]
fn test_parse_timestamp_any_non_digit_delimiters() {
    // Delimiter choice must not matter
    let slashes = parse_timestamp("2023/05/10 14:30:00.000").unwrap();
    let dashes = parse_timestamp("2023-05-10T14:30:00.000").unwrap();
    assert_eq!(slashes, dashes);
}

#[test]
fn test_parse_timestamp_multi_char_delimiter_runs() {
    // A run of consecutive non-digit characters counts as one separator
    let parsed = parse_timestamp("2023-05-10, 14:30:00.000").unwrap();
    let expected = Utc.with_ymd_and_hms(2023, 5, 10, 14, 30, 0).unwrap();
    assert_eq!(parsed, expected);

    assert_eq!(
        parse_timestamp("2023 - 05 - 10T14:30:00.000"),
        parse_timestamp("2023-05-10T14:30:00.000"),
    );
}

#[test]
fn test_parse_timestamp_start_of_year() {
    let parsed = parse_timestamp("2020-01-01 00:00:00.0").unwrap();
    let expected = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(parsed, expected);
}

#[test]
fn test_parse_timestamp_milliseconds() {
    let parsed = parse_timestamp("2023-05-10T14:30:00.250").unwrap();
    let expected = Utc.with_ymd_and_hms(2023, 5, 10, 14, 30, 0).unwrap() + Duration::milliseconds(250);
    assert_eq!(parsed, expected);
}

#[test]
fn test_parse_timestamp_idempotent() {
    let first = parse_timestamp("2023-05-10T14:30:00.000");
    let second = parse_timestamp("2023-05-10T14:30:00.000");
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_parse_timestamp_too_few_fields() {
    // Date-only input has three numeric groups, not seven
    assert_eq!(parse_timestamp("2023-05-10"), None);
    assert_eq!(parse_timestamp("2023-05-10T14:30:00"), None);
}

#[test]
fn test_parse_timestamp_garbage() {
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("not a date"), None);
}

#[test]
fn test_parse_timestamp_out_of_range_fields() {
    assert_eq!(parse_timestamp("2023-13-10T14:30:00.000"), None);
    assert_eq!(parse_timestamp("2023-00-10T14:30:00.000"), None);
    assert_eq!(parse_timestamp("2023-02-30T14:30:00.000"), None);
    assert_eq!(parse_timestamp("2023-05-10T25:30:00.000"), None);
}

#[test]
fn test_show_time_round_trip() {
    let instant = Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap();
    let formatted = format_show_time(instant);
    assert_eq!(formatted, "2019-05-21T21:30:00");
    assert_eq!(parse_show_time(&formatted), Some(instant));
}

#[test]
fn test_parse_show_time_rejects_bad_input() {
    assert_eq!(parse_show_time("2019-05-21"), None);
    assert_eq!(parse_show_time("gig at nine"), None);
}

#[test]
fn test_format_relative_date_today_and_neighbors() {
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
    let today = Utc.with_ymd_and_hms(2025, 1, 15, 20, 0, 0).unwrap();
    let tomorrow = Utc.with_ymd_and_hms(2025, 1, 16, 9, 0, 0).unwrap();
    let yesterday = Utc.with_ymd_and_hms(2025, 1, 14, 9, 0, 0).unwrap();

    assert_eq!(format_relative_date(today, now), "today");
    assert_eq!(format_relative_date(tomorrow, now), "tomorrow");
    assert_eq!(format_relative_date(yesterday, now), "yesterday");
}

#[test]
fn test_format_relative_date_within_week() {
    let now = Utc.with_ymd_and_hms(2025, 1, 13, 12, 0, 0).unwrap(); // Monday
    let friday = Utc.with_ymd_and_hms(2025, 1, 17, 21, 0, 0).unwrap();
    assert_eq!(format_relative_date(friday, now), "next Friday");
}

#[test]
fn test_format_relative_date_further_out() {
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
    let in_twelve_days = Utc.with_ymd_and_hms(2025, 1, 27, 12, 0, 0).unwrap();
    let same_year = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let other_year = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();

    assert_eq!(format_relative_date(in_twelve_days, now), "in 12 days");
    assert_eq!(format_relative_date(same_year, now), "Jun 01");
    assert_eq!(format_relative_date(other_year, now), "Jun 01, 2026");
}
