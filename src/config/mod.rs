// src/config/mod.rs

//! Task definition loading and validation.
//!
//! - [`model`] holds the serde types mapping the TOML file.
//! - [`loader`] reads and deserializes a file from disk.
//! - [`validate`] runs semantic checks on a loaded config.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ConfigFile, DefaultSection, TaskConfig};
