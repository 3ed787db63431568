//! Field Values
//!
//! Every field of a [`Node`] holds a [`Value`]: a scalar passed through
//! untouched, an owned sequence of values, or an owned child node. The
//! conversion rule lives in `From<serde_json::Value> for Value`, so anything
//! that enters a node from plain JSON goes through the same recursion.
//!
//! # Examples
//!
//! ```rust
//! use structview_core::models::Value;
//! use serde_json::json;
//!
//! let value = Value::from(json!({"tags": ["a", {"name": "b"}]}));
//! assert_eq!(value["tags"][1]["name"], "b");
//! assert!(value["tags"][7]["name"].is_null());
//! ```

use crate::models::Node;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::ops::Index;

/// Shared null returned by every soft lookup that misses
pub(crate) static NULL: Value = Value::Scalar(JsonValue::Null);

/// A converted field value
///
/// `Scalar` holds strings, numbers, booleans and null. Objects and arrays
/// are always converted into `Node` and `Sequence` before they are stored
/// in a node, including ones wrapped in `Scalar` by hand. A hand-built
/// `Value::Scalar(json!({..}))` that has not been stored yet is still a
/// scalar, so [`Value::get`] on it returns null; build it with
/// `Value::from(json!({..}))` instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Opaque passthrough value (string, number, boolean, null)
    Scalar(JsonValue),

    /// Ordered sequence, each element converted
    Sequence(Vec<Value>),

    /// Nested mapping converted into a child node
    Node(Node),
}

impl Value {
    /// The null scalar
    pub fn null() -> Self {
        Value::Scalar(JsonValue::Null)
    }

    /// Soft field lookup
    ///
    /// Returns the field of a node value, or null when this value is not a
    /// node or has no such field. Lets lookups chain through missing levels.
    /// Objects wrapped in `Scalar` by hand are not looked into.
    pub fn get(&self, key: &str) -> &Value {
        match self {
            Value::Node(node) => node.get(key),
            _ => &NULL,
        }
    }

    /// Soft sequence lookup
    ///
    /// Returns null when this value is not a sequence or `index` is out of range.
    pub fn at(&self, index: usize) -> &Value {
        match self {
            Value::Sequence(items) => items.get(index).unwrap_or(&NULL),
            _ => &NULL,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(JsonValue::Null))
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&JsonValue> {
        match self {
            Value::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(|v| v.as_str())
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(|v| v.as_i64())
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(|v| v.as_f64())
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(|v| v.as_bool())
    }

    /// Convert back into plain JSON without consuming the value
    pub fn to_value(&self) -> JsonValue {
        match self {
            Value::Scalar(value) => value.clone(),
            Value::Sequence(items) => JsonValue::Array(items.iter().map(Value::to_value).collect()),
            Value::Node(node) => node.to_value(),
        }
    }

    /// Convert back into plain JSON
    pub fn into_value(self) -> JsonValue {
        match self {
            Value::Scalar(value) => value,
            Value::Sequence(items) => {
                JsonValue::Array(items.into_iter().map(Value::into_value).collect())
            }
            Value::Node(node) => node.into_value(),
        }
    }

    /// Re-apply the conversion rule to a value that may have been built by hand
    ///
    /// Nodes are left as-is: their fields were converted when they were set.
    pub(crate) fn normalized(self) -> Value {
        match self {
            Value::Scalar(value) => Value::from(value),
            Value::Sequence(items) => {
                Value::Sequence(items.into_iter().map(Value::normalized).collect())
            }
            node @ Value::Node(_) => node,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::null()
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Object(map) => Value::Node(Node::from_checked_map(map)),
            JsonValue::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            scalar => Value::Scalar(scalar),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(JsonValue::from(value))
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i64, u64, f64, String, &str);

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonValue::deserialize(deserializer).map(Value::from)
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.at(index)
    }
}

/// Structural comparison against plain JSON
impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        match (self, other) {
            (Value::Scalar(value), other) => value == other,
            (Value::Sequence(items), JsonValue::Array(others)) => {
                items.len() == others.len() && items.iter().zip(others).all(|(a, b)| a == b)
            }
            (Value::Node(node), JsonValue::Object(map)) => {
                node.len() == map.len()
                    && map
                        .iter()
                        .all(|(key, value)| node.try_get(key).is_some_and(|field| field == value))
            }
            _ => false,
        }
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

/// Returns true when `value` nests objects/arrays deeper than `limit`
///
/// The root container counts as depth 1. Walks with an explicit stack so the
/// check itself cannot overflow on adversarial input.
pub(crate) fn nesting_exceeds(value: &JsonValue, limit: usize) -> bool {
    let mut stack = vec![(value, 1usize)];

    while let Some((current, depth)) = stack.pop() {
        match current {
            JsonValue::Object(map) => {
                if depth > limit {
                    return true;
                }
                stack.extend(map.values().map(|child| (child, depth + 1)));
            }
            JsonValue::Array(items) => {
                if depth > limit {
                    return true;
                }
                stack.extend(items.iter().map(|child| (child, depth + 1)));
            }
            _ => {}
        }
    }

    false
}
