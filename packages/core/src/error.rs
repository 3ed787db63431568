//! Error Types
//!
//! Construction and update of a structured view are the only fallible
//! operations on nodes. The date helpers reuse `InvalidArgument` for
//! unparsable text and bad format patterns; validators never error.

use thiserror::Error;

/// Errors raised by structured view construction, updates and date helpers
#[derive(Error, Debug)]
pub enum ViewError {
    /// Input had the wrong shape or type (non-object mapping, unparsable date, bad format)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input nesting is deeper than the configured limit
    #[error("Nesting depth exceeds limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// `ViewConfig::validate` rejected the configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON text could not be parsed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ViewError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an invalid argument error for a value whose JSON type is not an object
    pub fn expected_object(value: &serde_json::Value) -> Self {
        Self::InvalidArgument(format!(
            "expected an object, got {}",
            json_type_name(value)
        ))
    }
}

/// Name of a JSON value's type, as used in error messages
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;
