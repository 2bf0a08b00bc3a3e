// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::errors::{Result, ScriptrunError};
use crate::exec::{ExecutionRequest, OutputEncoding};

/// Top-level task definition file as read from TOML.
///
/// ```toml
/// [default]
/// capture_output = true
///
/// [task.extract]
/// command = """
/// echo one
/// echo two
/// """
/// env = { STAGE = "dev" }
/// ```
///
/// All sections are optional and have reasonable defaults, except that at
/// least one `[task.<name>]` must be present (checked during validation).
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// Defaults for `capture_output` and `output_encoding` from `[default]`.
    #[serde(default)]
    pub default: DefaultSection,

    /// All tasks from `[task.<name>]`.
    ///
    /// Keys are the *task names* (e.g. `"extract"`, `"load"`).
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// `[default]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DefaultSection {
    /// Default `capture_output` for tasks that do not set it; global default
    /// is `false`.
    #[serde(default)]
    pub capture_output: Option<bool>,

    /// Default `output_encoding` for tasks that do not set it; global default
    /// is `"utf-8"`.
    #[serde(default)]
    pub output_encoding: Option<String>,
}

/// `[task.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    /// The script body to execute. May span multiple lines.
    pub command: String,

    /// Optional explicit environment for the child process.
    ///
    /// If set, it is used *instead of* inheriting the current process
    /// environment. Context variables are merged on top either way.
    #[serde(default)]
    pub env: Option<BTreeMap<String, String>>,

    /// Whether to capture output lines for publication; if `None`, falls back
    /// to `default.capture_output`.
    #[serde(default)]
    pub capture_output: Option<bool>,

    /// Output encoding name; if `None`, falls back to
    /// `default.output_encoding`.
    #[serde(default)]
    pub output_encoding: Option<String>,
}

impl TaskConfig {
    /// Effective `capture_output` given the `[default]` section.
    pub fn effective_capture(&self, default: &DefaultSection) -> bool {
        self.capture_output
            .or(default.capture_output)
            .unwrap_or(false)
    }

    /// Effective `output_encoding` name given the `[default]` section.
    pub fn effective_encoding<'a>(&'a self, default: &'a DefaultSection) -> &'a str {
        self.output_encoding
            .as_deref()
            .or(default.output_encoding.as_deref())
            .unwrap_or("utf-8")
    }

    /// Build the [`ExecutionRequest`] for this task.
    pub fn to_request(&self, name: &str, default: &DefaultSection) -> Result<ExecutionRequest> {
        let encoding = self
            .effective_encoding(default)
            .parse::<OutputEncoding>()
            .map_err(ScriptrunError::ConfigError)?;

        Ok(ExecutionRequest {
            task_id: name.to_string(),
            command: self.command.clone(),
            env: self.env.clone(),
            capture_output: self.effective_capture(default),
            output_encoding: encoding,
        })
    }
}
