// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptrunError {
    /// The child process exited with a non-zero status.
    ///
    /// Deliberately generic: the exit code and any output produced before the
    /// failure are reported via the log trail only.
    #[error("Shell command failed")]
    CommandFailed,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ScriptrunError>;
