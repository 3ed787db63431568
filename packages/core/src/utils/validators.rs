//! Input validators
//!
//! Boolean checks for user-supplied values. None of these fail: malformed
//! input simply yields `false`. The numeric validators treat null as "not
//! provided" and accept it.

use crate::utils::dates::{parse_with_format, DEFAULT_DATE_FORMAT};
use regex::Regex;
use serde_json::Value as JsonValue;
use std::sync::LazyLock;

/// Local part, `@`, domain labels, and a top-level segment of two or more letters
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Check whether `date` matches `format`
///
/// `None`, empty and whitespace-only input is never a valid date. Parsing
/// uses chrono, whose `%Y` accepts years with fewer than four digits, so
/// `"24-01-30"` is a valid `%Y-%m-%d` date (year 24).
///
/// # Examples
///
/// ```
/// use structview_core::utils::is_valid_date;
///
/// assert!(is_valid_date(Some("2024-02-29"), "%Y-%m-%d"));
/// assert!(!is_valid_date(Some("2023-02-29"), "%Y-%m-%d"));
/// assert!(!is_valid_date(None, "%Y-%m-%d"));
/// ```
pub fn is_valid_date(date: Option<&str>, format: &str) -> bool {
    match date {
        Some(text) if !text.trim().is_empty() => parse_with_format(text, format).is_some(),
        _ => false,
    }
}

/// [`is_valid_date`] with the `%Y-%m-%d` format
pub fn is_valid_date_default(date: Option<&str>) -> bool {
    is_valid_date(date, DEFAULT_DATE_FORMAT)
}

/// Check that `value` is a number within optional inclusive bounds
///
/// Numbers are used as-is, strings are trimmed and parsed, booleans count
/// as 1 and 0. Null is accepted. Arrays and objects are not numbers.
/// Strings follow Rust float syntax, so digit separators such as `"1_000"`
/// are rejected.
pub fn validate_number(value: &JsonValue, lower: Option<f64>, upper: Option<f64>) -> bool {
    let number = match value {
        JsonValue::Null => return true,
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        JsonValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        JsonValue::Array(_) | JsonValue::Object(_) => None,
    };

    let Some(number) = number else {
        return false;
    };

    if lower.is_some_and(|bound| number < bound) {
        return false;
    }
    if upper.is_some_and(|bound| number > bound) {
        return false;
    }
    true
}

/// Check that `value` is an integer within optional inclusive bounds
///
/// Strings must be in canonical form: the parsed integer printed back must
/// equal the input exactly, so `"007"`, `"+7"` and `" 7"` are rejected.
/// Floats (even `7.0`) and booleans are rejected. Null is accepted.
/// Strings are parsed as `i128`; canonical integers beyond that range are
/// rejected.
///
/// # Examples
///
/// ```
/// use structview_core::utils::validate_integer;
/// use serde_json::json;
///
/// assert!(validate_integer(&json!("7"), None, None));
/// assert!(!validate_integer(&json!("007"), None, None));
/// assert!(!validate_integer(&json!(12), None, Some(10)));
/// ```
pub fn validate_integer(value: &JsonValue, lower: Option<i64>, upper: Option<i64>) -> bool {
    let integer: Option<i128> = match value {
        JsonValue::Null => return true,
        JsonValue::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from)),
        JsonValue::String(s) => s
            .parse::<i128>()
            .ok()
            .filter(|parsed| parsed.to_string() == *s),
        _ => None,
    };

    let Some(integer) = integer else {
        return false;
    };

    if lower.is_some_and(|bound| integer < i128::from(bound)) {
        return false;
    }
    if upper.is_some_and(|bound| integer > i128::from(bound)) {
        return false;
    }
    true
}

/// Check that `value` is a string holding a well-formed email address
pub fn validate_email(value: &JsonValue) -> bool {
    value.as_str().is_some_and(is_valid_email)
}

/// Check an email address
///
/// Rejects consecutive dots anywhere, a trailing dot, and a local part that
/// ends with a dot.
///
/// # Examples
///
/// ```
/// use structview_core::utils::is_valid_email;
///
/// assert!(is_valid_email("example@example.com"));
/// assert!(is_valid_email("another.example@domain.co"));
/// assert!(!is_valid_email("bad..email@domain.com"));
/// assert!(!is_valid_email("invalid-email"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    if email.contains("..") || email.ends_with('.') || email.contains(".@") {
        return false;
    }
    EMAIL_RE.is_match(email)
}
