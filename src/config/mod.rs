//! Configuration model for mutdiff.
//!
//! This module defines the Config struct that represents an optional
//! `.mutdiff.yaml`. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), defaults for every field, and validation.

mod model;
mod operations;


// Re-export public API
pub use model::{Config, DEFAULT_CONFIG_FILE};
