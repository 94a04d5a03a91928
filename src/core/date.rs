use chrono::{DateTime, NaiveDateTime};

use crate::error::{TimelineError, TimelineResult};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses `"YYYY-MM-DD HH:MM"` (a `T` separator is accepted too) as UTC epoch
/// milliseconds.
pub fn date_time_to_timestamp(date_time: &str) -> TimelineResult<i64> {
    let normalized = date_time.trim().replacen('T', " ", 1);
    NaiveDateTime::parse_from_str(&normalized, DATE_TIME_FORMAT)
        .map(|parsed| parsed.and_utc().timestamp_millis())
        .map_err(|err| {
            TimelineError::InvalidData(format!("invalid scrobble date-time `{date_time}`: {err}"))
        })
}

/// `"YYYY-MM-DD"` prefix of a date-time string.
#[must_use]
pub fn date_time_to_date(date_time: &str) -> &str {
    date_time.get(..10).unwrap_or(date_time)
}

/// Formats UTC epoch milliseconds as `"YYYY-MM-DD HH:MM"`.
pub fn timestamp_to_date_time(timestamp: i64) -> TimelineResult<String> {
    DateTime::from_timestamp_millis(timestamp)
        .map(|time| time.format(DATE_TIME_FORMAT).to_string())
        .ok_or_else(|| TimelineError::InvalidData(format!("timestamp {timestamp} out of range")))
}
