//! Structured View Node
//!
//! This module defines `Node`, a field-accessible view over a nested JSON
//! object. Construction converts the object recursively: nested objects
//! become child nodes, arrays become sequences of converted values, and
//! everything else is stored unchanged.
//!
//! # Soft Access
//!
//! Reading a field that was never set yields null instead of failing, and
//! lookups chain through [`Value::get`], so deep paths with missing
//! intermediate levels terminate in null.
//!
//! # Examples
//!
//! ```rust
//! use structview_core::models::Node;
//! use serde_json::json;
//!
//! let view = Node::from_value(json!({
//!     "user": {
//!         "name": "John Doe",
//!         "age": 30,
//!         "address": {
//!             "city": "Springfield",
//!             "country": "USA"
//!         }
//!     }
//! }))
//! .unwrap();
//!
//! assert_eq!(view["user"]["name"], "John Doe");
//! assert_eq!(view["user"]["address"]["city"], "Springfield");
//! assert!(view["user"]["address"]["zip_code"].is_null());
//! ```

use crate::config::ViewConfig;
use crate::error::{Result, ViewError};
use crate::models::value::{nesting_exceeds, NULL};
use crate::models::Value;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// One converted level of a nested JSON object
///
/// Fields are kept in a `BTreeMap`, so iteration and [`Node::to_value`]
/// emit keys in sorted order rather than insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Node {
    fields: BTreeMap<String, Value>,
}

impl Node {
    /// Create an empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a node from a JSON object using the default [`ViewConfig`]
    ///
    /// `null` is treated as "no mapping given" and yields an empty node.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::InvalidArgument` if `value` is neither an object
    /// nor null, and `ViewError::DepthLimitExceeded` if it nests deeper than
    /// the configured limit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structview_core::models::Node;
    /// use serde_json::json;
    ///
    /// let view = Node::from_value(json!({"a": [{"b": 1}, 2, {"c": 3}]})).unwrap();
    /// assert_eq!(view["a"][0]["b"], json!(1));
    /// assert_eq!(view["a"][1], json!(2));
    /// assert_eq!(view["a"][2]["c"], json!(3));
    ///
    /// assert!(Node::from_value(json!([1, 2, 3])).is_err());
    /// ```
    pub fn from_value(value: JsonValue) -> Result<Self> {
        Self::from_value_with_config(value, &ViewConfig::default())
    }

    /// Construct a node from a JSON object with explicit limits
    pub fn from_value_with_config(value: JsonValue, config: &ViewConfig) -> Result<Self> {
        if value.is_null() {
            config.validate().map_err(ViewError::InvalidConfig)?;
            return Ok(Self::new());
        }

        let map = checked_object(value, config)?;
        let node = Self::from_checked_map(map);
        tracing::debug!("Constructed structured view with {} fields", node.len());
        Ok(node)
    }

    /// Construct a node from an already-unwrapped JSON object
    pub fn from_map(map: Map<String, JsonValue>) -> Result<Self> {
        Self::from_value(JsonValue::Object(map))
    }

    /// Parse JSON text and construct a node from it
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Json` for malformed text, otherwise the same
    /// errors as [`Node::from_value`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Convert an object whose shape and depth were already checked
    pub(crate) fn from_checked_map(map: Map<String, JsonValue>) -> Self {
        let fields = map
            .into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect();
        Self { fields }
    }

    /// Soft field lookup
    ///
    /// Returns the field's value, or null if the field was never set.
    pub fn get(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&NULL)
    }

    /// Strict field lookup
    ///
    /// Distinguishes a missing field (`None`) from a field explicitly set to null.
    pub fn try_get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Set a field, converting objects and arrays on the way in
    ///
    /// Never fails. Unlike [`Node::update`] it does not apply a depth limit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structview_core::models::Node;
    /// use serde_json::json;
    ///
    /// let mut view = Node::new();
    /// view.set("profile", json!({"langs": [{"name": "rust"}]}));
    /// assert_eq!(view["profile"]["langs"][0]["name"], "rust");
    /// ```
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into().normalized());
    }

    /// Merge a JSON object into this node using the default [`ViewConfig`]
    ///
    /// Every key in `value` is converted and overwrites (or creates) the
    /// matching field. Fields not named in `value` are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::InvalidArgument` if `value` is not an object
    /// (null included). The node is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structview_core::models::Node;
    /// use serde_json::json;
    ///
    /// let mut view = Node::from_value(json!({"user": {"name": "John Doe"}, "active": true})).unwrap();
    /// view.update(json!({"user": {"name": "Jane Doe", "address": {"zip_code": "12345"}}})).unwrap();
    ///
    /// assert_eq!(view["user"]["name"], "Jane Doe");
    /// assert_eq!(view["user"]["address"]["zip_code"], "12345");
    /// assert_eq!(view["active"], json!(true));
    /// ```
    pub fn update(&mut self, value: JsonValue) -> Result<()> {
        self.update_with_config(value, &ViewConfig::default())
    }

    /// Merge a JSON object into this node with explicit limits
    pub fn update_with_config(&mut self, value: JsonValue, config: &ViewConfig) -> Result<()> {
        let map = checked_object(value, config)?;
        let updated = map.len();

        for (key, value) in map {
            self.set(key, value);
        }

        tracing::debug!(
            "Updated {} fields on structured view ({} total)",
            updated,
            self.len()
        );
        Ok(())
    }

    /// Remove a field, returning its value if it was set
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert back into a plain JSON object map
    pub fn to_map(&self) -> Map<String, JsonValue> {
        self.fields
            .iter()
            .map(|(key, value)| (key.clone(), value.to_value()))
            .collect()
    }

    /// Convert back into a plain JSON object
    ///
    /// Child nodes become objects, sequences become arrays with every
    /// element converted back, and scalars are copied unchanged.
    pub fn to_value(&self) -> JsonValue {
        JsonValue::Object(self.to_map())
    }

    /// Convert back into a plain JSON object, consuming the node
    pub fn into_value(self) -> JsonValue {
        JsonValue::Object(
            self.fields
                .into_iter()
                .map(|(key, value)| (key, value.into_value()))
                .collect(),
        )
    }
}

/// Check shape and depth before any conversion happens
fn checked_object(value: JsonValue, config: &ViewConfig) -> Result<Map<String, JsonValue>> {
    config.validate().map_err(ViewError::InvalidConfig)?;

    let map = match value {
        JsonValue::Object(map) => map,
        other => return Err(ViewError::expected_object(&other)),
    };

    // The root object is depth 1, so its children may use one level less
    let too_deep = map
        .values()
        .any(|child| nesting_exceeds(child, config.max_depth - 1));
    if too_deep {
        tracing::warn!(
            "Rejected input nested deeper than {} levels",
            config.max_depth
        );
        return Err(ViewError::DepthLimitExceeded {
            limit: config.max_depth,
        });
    }

    Ok(map)
}

impl TryFrom<JsonValue> for Node {
    type Error = ViewError;

    fn try_from(value: JsonValue) -> Result<Self> {
        Self::from_value(value)
    }
}

impl From<Node> for JsonValue {
    fn from(node: Node) -> Self {
        node.into_value()
    }
}

impl FromStr for Node {
    type Err = ViewError;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_json_str(text)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        Node::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl Index<&str> for Node {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
