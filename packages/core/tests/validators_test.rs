//! Integration tests for the date helpers and input validators

use chrono::NaiveDate;
use serde_json::json;
use structview_core::utils::{
    add_days, add_days_default, is_valid_date, is_valid_date_default, validate_email,
    validate_integer, validate_number, DateInput,
};
use structview_core::ViewError;

#[test]
fn test_add_days_default_format() {
    assert_eq!(add_days_default("2024-01-30", 5).unwrap(), "2024-02-04");
}

#[test]
fn test_add_days_output_is_valid_in_same_format() {
    let formats = ["%Y-%m-%d", "%d/%m/%Y", "%m-%d-%Y", "%B %d, %Y"];
    let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();

    for format in formats {
        let shifted = add_days(start, 3, format).unwrap();
        assert!(
            is_valid_date(Some(shifted.as_str()), format),
            "'{}' should be valid for format '{}'",
            shifted,
            format
        );
        assert_eq!(
            add_days(shifted.as_str(), -3, format).unwrap(),
            add_days(start, 0, format).unwrap()
        );
    }
}

#[test]
fn test_add_days_rejects_unsupported_json_type() {
    let value = json!({"date": "2024-01-30"});

    let result = DateInput::try_from(&value).and_then(|input| add_days_default(input, 1));

    assert!(matches!(result, Err(ViewError::InvalidArgument(_))));
}

#[test]
fn test_is_valid_date_handles_empty_input() {
    assert!(!is_valid_date_default(None));
    assert!(!is_valid_date_default(Some("")));
    assert!(is_valid_date_default(Some("1999-12-31")));
}

#[test]
fn test_validators_accept_null_as_not_provided() {
    assert!(validate_number(&json!(null), None, None));
    assert!(validate_integer(&json!(null), None, None));
    assert!(!validate_email(&json!(null)));
}

#[test]
fn test_form_field_validation() {
    let form = json!({
        "age": "42",
        "score": "97.5",
        "quantity": "007",
        "email": "bad..email@domain.com",
        "contact": "example@example.com"
    });

    assert!(validate_integer(&form["age"], Some(0), Some(150)));
    assert!(validate_number(&form["score"], Some(0.0), Some(100.0)));
    assert!(!validate_integer(&form["quantity"], None, None));
    assert!(validate_integer(&json!("7"), None, None));
    assert!(!validate_email(&form["email"]));
    assert!(validate_email(&form["contact"]));
    assert!(!validate_email(&json!("invalid-email")));

    // Absent form fields index as null
    assert!(validate_number(&form["missing"], Some(1.0), None));
}
