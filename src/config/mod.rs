//! Configuration model for broom.
//!
//! This module defines the Config struct that holds the static retention
//! defaults, normally loaded from a YAML file. It supports forward-compatible
//! YAML parsing (unknown fields are ignored) and sensible defaults for
//! optional fields. Validation of the merged policy lives in
//! [`crate::policy`], since every field here may be overridden per request.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{AgeUnit, FolderRemovalMode, PatternType};
