//! StructView Core
//!
//! Field-accessible views over nested JSON objects, plus a handful of
//! standalone date and input-validation helpers.
//!
//! # Architecture
//!
//! - **Structured View**: a JSON object is converted once into a tree of
//!   [`Node`]s; nested objects become child nodes, arrays become sequences
//! - **Soft Access**: unknown fields read as null, so lookups chain safely
//! - **Lossless Round-Trip**: [`Node::to_value`] rebuilds the plain JSON
//! - **Pure Helpers**: date arithmetic and validators share no state
//!
//! # Modules
//!
//! - [`models`] - `Node` and `Value`
//! - [`config`] - Conversion limits (`ViewConfig`)
//! - [`error`] - `ViewError` and the crate `Result` alias
//! - [`utils`] - Date arithmetic and input validators

pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::ViewConfig;
pub use error::{Result, ViewError};
pub use models::*;
pub use utils::*;
