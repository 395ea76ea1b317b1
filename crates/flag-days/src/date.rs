//! Date parsing and the "today" default used by the query shortcuts.
//!
//! Accepts plain ISO dates (`2018-01-01`), naive datetimes
//! (`2018-01-01T14:00:00`, optionally with fractional seconds) and RFC 3339 timestamps
//! (`2018-01-01T14:00:00+02:00`). Datetimes are reduced to their calendar
//! day in the offset they were written in.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::error::{FlagDayError, Result};

/// Parse a date string into a calendar day.
///
/// # Errors
/// Returns `FlagDayError::InvalidDate` if the text matches none of the
/// accepted formats.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }

    Err(FlagDayError::InvalidDate(input.to_string()))
}

/// The current calendar day in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
