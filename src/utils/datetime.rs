//! Date and time utility functions
//!
//! Show start times travel over the wire as plain `YYYY-MM-DDTHH:MM:SS`
//! strings, and user-entered timestamps arrive in a looser "seven numeric
//! fields with arbitrary separators" shape. Both are handled here, along
//! with the relative phrasing used when listing shows ("today",
//! "in 3 days", ...).

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, TimeZone, Utc, Weekday};

/// Wire format for show start times (e.g. "2019-05-21T21:30:00")
pub const SHOW_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a loosely delimited date/time string into a UTC instant.
///
/// The input is split on runs of one-or-more non-digit characters and the
/// first seven numeric fields are read positionally as year, month (1-based),
/// day, hour, minute, second, millisecond. The separators themselves don't
/// matter, so `"2023-05-10T14:30:00.000"` and `"2023/05/10 14:30:00.000"`
/// parse to the same instant. All fields are interpreted as UTC.
///
/// # Returns
/// * `Some(DateTime<Utc>)` for well-formed input
/// * `None` when fewer than seven fields are present or a field is out of
///   range. Malformed input never panics and never produces an error value;
///   callers check for the missing timestamp instead.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    // Consecutive delimiters collapse into one: split on every non-digit,
    // then drop the empty tokens between adjacent separators.
    let mut fields = s
        .split(|c: char| !c.is_ascii_digit())
        .filter(|field| !field.is_empty());
    let mut next = move || fields.next()?.parse::<u32>().ok();

    let year = next()?;
    let month = next()?;
    let day = next()?;
    let hour = next()?;
    let minute = next()?;
    let second = next()?;
    let millisecond = next()?;

    let base = Utc
        .with_ymd_and_hms(year as i32, month, day, hour, minute, second)
        .single()?;
    base.checked_add_signed(Duration::milliseconds(i64::from(millisecond)))
}

/// Parse a show start time in the wire format to a UTC instant
pub fn parse_show_time(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, SHOW_TIME_FORMAT)
        .ok()
        .map(|dt| Utc.from_utc_datetime(&dt))
}

/// Format a UTC instant in the wire format for show start times
pub fn format_show_time(dt: DateTime<Utc>) -> String {
    dt.format(SHOW_TIME_FORMAT).to_string()
}

/// Phrase a show date relative to `now` in human-readable form
///
/// # Arguments
/// * `start` - The show's start instant
/// * `now` - The reference instant (normally `Utc::now()`)
///
/// # Returns
/// * `String` - "today", "tomorrow", "next Friday", "in 12 days",
///   "3 days ago", or the plain date for anything further out
pub fn format_relative_date(start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days_diff = (start.date_naive() - now.date_naive()).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => {
            format!("next {}", weekday_name(start.weekday()))
        }
        diff if (-7..-1).contains(&diff) => {
            format!("last {}", weekday_name(start.weekday()))
        }
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            // Further out - show the actual date, with the year only when
            // it differs from the current one
            if start.year() == now.year() {
                start.format("%b %d").to_string()
            } else {
                start.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
