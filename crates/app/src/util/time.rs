use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::{AppError, Result};
use dashboard_core::DateRange;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn validate_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|err| AppError::InvalidInput(format!("invalid date {}: {}", value, err)))
}

/// The last 30 days ending today, the range used when none is supplied.
pub fn default_range() -> DateRange {
    let today = Utc::now().date_naive();
    let start = today - Duration::days(30);
    DateRange {
        start: start.format(DATE_FORMAT).to_string(),
        end: today.format(DATE_FORMAT).to_string(),
    }
}

/// UTC calendar day of an epoch-seconds timestamp, as rendered in the
/// per-day table and chart labels.
pub fn day_label(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(moment) => moment.format(DATE_FORMAT).to_string(),
        None => "invalid date".to_string(),
    }
}
