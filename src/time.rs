//! Date/time helpers on top of chrono.
//!
//! - Truncation of timestamps to second/minute/hour/day
//! - Month arithmetic with day clamping
//! - Unix-millisecond conversions

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};

/// Drop the sub-second part of a timestamp.
pub fn truncate_to_second(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt - Duration::nanoseconds(i64::from(dt.timestamp_subsec_nanos()))
}

/// Truncate a timestamp to the start of its minute.
pub fn truncate_to_minute(dt: DateTime<Utc>) -> DateTime<Utc> {
    let dt = truncate_to_second(dt);
    dt - Duration::seconds(i64::from(dt.second()))
}

/// Truncate a timestamp to the start of its hour.
pub fn truncate_to_hour(dt: DateTime<Utc>) -> DateTime<Utc> {
    let dt = truncate_to_minute(dt);
    dt - Duration::minutes(i64::from(dt.minute()))
}

/// Truncate a timestamp to midnight UTC.
pub fn truncate_to_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    let dt = truncate_to_hour(dt);
    dt - Duration::hours(i64::from(dt.hour()))
}

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a month. `month` is 1-based.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(Error::validation_out_of_range(
            "month",
            format!("month must be between 1 and 12, got {}", month),
            month.to_string(),
            Some("1".to_string()),
            Some("12".to_string()),
        ));
    }
    Ok(days_in_month_unchecked(year, month))
}

fn days_in_month_unchecked(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// First day of the date's month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Last day of the date's month.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let last = days_in_month_unchecked(date.year(), date.month());
    NaiveDate::from_ymd_opt(date.year(), date.month(), last).unwrap_or(date)
}

/// Shift a date by whole months, clamping the day to the length of the
/// target month (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month_unchecked(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Milliseconds since the Unix epoch.
pub fn to_unix_ms(dt: DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}

/// Timestamp from milliseconds since the Unix epoch.
pub fn from_unix_ms(ms: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms).ok_or_else(|| {
        Error::validation_out_of_range(
            "ms",
            format!("{} is outside the representable timestamp range", ms),
            ms.to_string(),
            None,
            None,
        )
    })
}
