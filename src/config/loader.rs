// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;
use crate::errors::Result;

/// Load a task definition file from a given path and return the raw
/// `ConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (task names, encodings, etc.). Use [`load_and_validate`] for
/// that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: ConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a task definition file from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - at least one task,
///   - non-blank commands,
///   - task names usable as temp-file prefixes,
///   - supported output encodings.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `Scriptrun.toml` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `SCRIPTRUN_CONFIG`).
/// - Look for multiple default locations.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Scriptrun.toml")
}
