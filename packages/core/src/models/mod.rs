//! Data Models
//!
//! This module contains the structured view types:
//!
//! - `Node` - one converted level of a nested JSON object
//! - `Value` - a field value (scalar, sequence, or child node)
//!
//! Conversion from plain JSON is recursive and happens once, when data
//! enters a node; conversion back to plain JSON is lossless.

mod node;
mod value;

pub use node::Node;
pub use value::Value;
