// src/config/validate.rs

use crate::config::model::ConfigFile;
use crate::errors::{Result, ScriptrunError};
use crate::exec::OutputEncoding;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - there is at least one task
/// - every command is non-blank
/// - task names are usable as temp-file prefixes
/// - every referenced output encoding is supported
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    ensure_has_tasks(cfg)?;
    validate_task_names(cfg)?;
    validate_commands(cfg)?;
    validate_encodings(cfg)?;
    Ok(())
}

fn ensure_has_tasks(cfg: &ConfigFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(ScriptrunError::ConfigError(
            "config must contain at least one [task.<name>] section".to_string(),
        ));
    }
    Ok(())
}

/// Task names become the prefix of the temporary script file, so they must be
/// plain filename material.
fn validate_task_names(cfg: &ConfigFile) -> Result<()> {
    for name in cfg.task.keys() {
        let ok = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !ok {
            return Err(ScriptrunError::ConfigError(format!(
                "task name '{name}' is not usable as a file prefix \
                 (allowed: alphanumeric, '-', '_', '.')"
            )));
        }
    }
    Ok(())
}

fn validate_commands(cfg: &ConfigFile) -> Result<()> {
    for (name, task) in cfg.task.iter() {
        if task.command.trim().is_empty() {
            return Err(ScriptrunError::ConfigError(format!(
                "task '{name}' has an empty `command`"
            )));
        }
    }
    Ok(())
}

fn validate_encodings(cfg: &ConfigFile) -> Result<()> {
    if let Some(enc) = cfg.default.output_encoding.as_deref() {
        enc.parse::<OutputEncoding>()
            .map_err(|e| ScriptrunError::ConfigError(format!("[default]: {e}")))?;
    }
    for (name, task) in cfg.task.iter() {
        if let Some(enc) = task.output_encoding.as_deref() {
            enc.parse::<OutputEncoding>()
                .map_err(|e| ScriptrunError::ConfigError(format!("task '{name}': {e}")))?;
        }
    }
    Ok(())
}
