//! Date arithmetic helpers
//!
//! Dates arrive either as text in a caller-supplied `strftime`-style format
//! or as chrono values. Text parsing follows `strptime` conventions: a
//! format without time fields yields midnight, and a format without date
//! fields yields 1900-01-01. Unlike `strptime`, chrono's `%Y` also accepts
//! years written with fewer than four digits.

use crate::error::{json_type_name, Result, ViewError};
use chrono::format::{Item, StrftimeItems};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Write;

/// Format used when the caller does not supply one
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A date accepted by [`add_days`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// Text parsed with the format passed to [`add_days`]
    Text(&'a str),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(text.as_str())
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(datetime: NaiveDateTime) -> Self {
        DateInput::DateTime(datetime)
    }
}

impl<'a> TryFrom<&'a serde_json::Value> for DateInput<'a> {
    type Error = ViewError;

    fn try_from(value: &'a serde_json::Value) -> Result<Self> {
        value.as_str().map(DateInput::Text).ok_or_else(|| {
            ViewError::invalid_argument(format!(
                "date must be a string, date or datetime, got {}",
                json_type_name(value)
            ))
        })
    }
}

/// Add `days` to a date and format the result
///
/// # Errors
///
/// Returns `ViewError::InvalidArgument` if text input does not match
/// `format`, if `format` is not a valid pattern, or if the result falls
/// outside the representable date range.
///
/// # Examples
///
/// ```rust
/// use structview_core::utils::add_days;
/// use chrono::NaiveDate;
///
/// assert_eq!(add_days("2024-01-30", 5, "%Y-%m-%d").unwrap(), "2024-02-04");
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(add_days(date, -1, "%d/%m/%Y").unwrap(), "29/02/2024");
/// ```
pub fn add_days<'a>(date: impl Into<DateInput<'a>>, days: i64, format: &str) -> Result<String> {
    check_format(format)?;

    let start = match date.into() {
        DateInput::Text(text) => parse_with_format(text, format).ok_or_else(|| {
            ViewError::invalid_argument(format!(
                "'{}' does not match format '{}'",
                text, format
            ))
        })?,
        DateInput::Date(date) => date.and_time(NaiveTime::MIN),
        DateInput::DateTime(datetime) => datetime,
    };

    let shifted = Duration::try_days(days)
        .and_then(|delta| start.checked_add_signed(delta))
        .ok_or_else(|| {
            ViewError::invalid_argument(format!("adding {} days to {} is out of range", days, start))
        })?;

    let mut formatted = String::new();
    write!(formatted, "{}", shifted.format(format)).map_err(|_| {
        ViewError::invalid_argument(format!("cannot format date with '{}'", format))
    })?;
    Ok(formatted)
}

/// [`add_days`] with [`DEFAULT_DATE_FORMAT`]
pub fn add_days_default<'a>(date: impl Into<DateInput<'a>>, days: i64) -> Result<String> {
    add_days(date, days, DEFAULT_DATE_FORMAT)
}

/// Parse `text` with `format`, filling missing parts the way `strptime` does
///
/// Tries a full date-time first, then a date alone (midnight), then a time
/// alone (on 1900-01-01).
pub(crate) fn parse_with_format(text: &str, format: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
        return Some(datetime);
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, format) {
        return Some(date.and_time(NaiveTime::MIN));
    }

    match NaiveTime::parse_from_str(text, format) {
        Ok(time) => NaiveDate::from_ymd_opt(1900, 1, 1).map(|date| date.and_time(time)),
        Err(e) => {
            tracing::debug!("'{}' does not match format '{}': {}", text, format, e);
            None
        }
    }
}

fn check_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ViewError::invalid_argument(format!(
            "invalid date format '{}'",
            format
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_days_across_month() {
        assert_eq!(add_days_default("2024-01-30", 5).unwrap(), "2024-02-04");
    }

    #[test]
    fn test_add_days_leap_year_and_negative() {
        assert_eq!(add_days_default("2024-02-28", 1).unwrap(), "2024-02-29");
        assert_eq!(add_days_default("2023-02-28", 1).unwrap(), "2023-03-01");
        assert_eq!(add_days_default("2024-01-01", -1).unwrap(), "2023-12-31");
        assert_eq!(add_days_default("2024-06-15", 0).unwrap(), "2024-06-15");
    }

    #[test]
    fn test_add_days_custom_format() {
        assert_eq!(add_days("30/01/2024", 2, "%d/%m/%Y").unwrap(), "01/02/2024");
        assert_eq!(
            add_days("2024-01-30 08:15", 1, "%Y-%m-%d %H:%M").unwrap(),
            "2024-01-31 08:15"
        );
    }

    #[test]
    fn test_add_days_from_chrono_values() {
        assert_eq!(add_days_default(date(2024, 12, 31), 1).unwrap(), "2025-01-01");

        let datetime = date(2024, 1, 1).and_hms_opt(23, 30, 0).unwrap();
        assert_eq!(
            add_days(datetime, 1, "%Y-%m-%dT%H:%M").unwrap(),
            "2024-01-02T23:30"
        );
    }

    #[test]
    fn test_add_days_rejects_non_matching_text() {
        let err = add_days_default("30/01/2024", 1).unwrap_err();
        assert!(matches!(err, ViewError::InvalidArgument(_)));
        assert!(err.to_string().contains("does not match format"));

        assert!(add_days_default("", 1).is_err());
        assert!(add_days_default("2024-02-30", 1).is_err());
    }

    #[test]
    fn test_add_days_rejects_bad_format_and_overflow() {
        let err = add_days(date(2024, 1, 1), 1, "%Q").unwrap_err();
        assert!(err.to_string().contains("invalid date format"));

        assert!(add_days_default(date(2024, 1, 1), i64::MAX).is_err());
        assert!(add_days_default(NaiveDate::MAX, 1).is_err());
    }

    #[test]
    fn test_date_input_from_json() {
        let value = json!("2024-01-30");
        let input = DateInput::try_from(&value).unwrap();
        assert_eq!(add_days_default(input, 5).unwrap(), "2024-02-04");

        let err = DateInput::try_from(&json!(20240130)).unwrap_err();
        assert!(err.to_string().contains("got number"));
    }

    #[test]
    fn test_parse_with_format_fills_missing_parts() {
        assert_eq!(
            parse_with_format("2024-01-30", "%Y-%m-%d"),
            Some(date(2024, 1, 30).and_hms_opt(0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_with_format("14:05", "%H:%M"),
            Some(date(1900, 1, 1).and_hms_opt(14, 5, 0).unwrap())
        );
        assert_eq!(parse_with_format("not a date", "%Y-%m-%d"), None);
        assert_eq!(
            parse_with_format("24-01-30", "%Y-%m-%d"),
            Some(date(24, 1, 30).and_hms_opt(0, 0, 0).unwrap())
        );
    }
}
