//! Parsing of date and time literals typed into a search box.
//!
//! Naive literals (no offset) are read in the time zone of the search
//! definition and converted to UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];

/// Parses a point in time. Date-only literals resolve to local midnight.
pub fn parse_datetime(value: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = parse_naive_datetime(value)
        .or_else(|| parse_naive_date(value).and_then(|d| d.and_hms_opt(0, 0, 0)))?;

    // `earliest` picks the first instant when a DST fold makes the time ambiguous
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parses a calendar date. Literals that carry a time of day are reduced to
/// their date in `tz`.
pub fn parse_date(value: &str, tz: Tz) -> Option<NaiveDate> {
    let value = value.trim();

    if let Some(date) = parse_naive_date(value) {
        return Some(date);
    }
    if let Some(naive) = parse_naive_datetime(value) {
        return Some(naive.date());
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&tz).date_naive())
}

/// Integer or plain decimal literal, optionally negative.
pub fn is_numeric_literal(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let mut parts = digits.splitn(2, '.');

    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next();

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match fraction {
        None => all_digits(whole),
        Some(fraction) => all_digits(whole) && all_digits(fraction),
    }
}

fn parse_naive_datetime(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn parse_naive_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}
