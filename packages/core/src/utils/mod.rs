//! Utility functions
//!
//! Pure helpers that stand on their own, independent of the structured view:
//! date arithmetic and input validation.

pub mod dates;
pub mod validators;

pub use dates::{add_days, add_days_default, DateInput, DEFAULT_DATE_FORMAT};
pub use validators::{
    is_valid_date, is_valid_date_default, is_valid_email, validate_email, validate_integer,
    validate_number,
};
