//! Configuration for structured view conversion

use serde::{Deserialize, Serialize};

/// Default nesting limit, the same limit serde_json applies when parsing text
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Hard upper bound for `max_depth`
/// Conversion, `to_value` and drop each recurse once per nesting level, so a
/// document this deep must fit on a default 2 MiB thread stack
pub const MAX_SUPPORTED_DEPTH: usize = 256;

/// Limits applied when a node is constructed or updated from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Maximum nesting depth of objects and arrays (the root object counts as 1)
    pub max_depth: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ViewConfig {
    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_depth == 0 {
            return Err("max_depth must be greater than 0".to_string());
        }

        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(format!(
                "max_depth cannot exceed {}",
                MAX_SUPPORTED_DEPTH
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let config = ViewConfig::default().with_max_depth(0);
        assert!(config.validate().is_err());

        let config = ViewConfig::default().with_max_depth(MAX_SUPPORTED_DEPTH + 1);
        let err = config.validate().unwrap_err();
        assert!(err.contains("cannot exceed"));

        let config = ViewConfig::default().with_max_depth(MAX_SUPPORTED_DEPTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserialize_fills_defaults() {
        let config: ViewConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ViewConfig::default());

        let config: ViewConfig = serde_json::from_str(r#"{"max_depth": 16}"#).unwrap();
        assert_eq!(config.max_depth, 16);
    }
}
