// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exchange;
pub mod exec;
pub mod logging;

use std::collections::BTreeMap;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ConfigFile;
use crate::errors::{Result, ScriptrunError};
use crate::exchange::{MemoryExchange, OutputExchange};

/// High-level entry point used by `main.rs`.
///
/// Runs the selected task and echoes any captured output lines to stdout
/// (logs go to stderr, so stdout carries only the published lines).
pub fn run(args: CliArgs) -> Result<()> {
    let mut exchange = MemoryExchange::new();
    let task_id = run_with_exchange(args, &mut exchange)?;

    if let Some(task_id) = task_id {
        if let Some(lines) = exchange.fetch(&task_id) {
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Run the task named by `args` and publish captured output into `exchange`.
///
/// Returns the task id the output was published under, or `None` when nothing
/// ran (dry-run) or capture was disabled.
pub fn run_with_exchange(
    args: CliArgs,
    exchange: &mut dyn OutputExchange,
) -> Result<Option<String>> {
    let cfg = load_and_validate(&args.config)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(None);
    }

    let context_vars = parse_context_vars(&args.vars)?;
    let name = select_task(&args, &cfg)?;
    let task_cfg = cfg
        .task
        .get(&name)
        .ok_or_else(|| ScriptrunError::TaskNotFound(name.clone()))?;

    let request = task_cfg.to_request(&name, &cfg.default)?;
    let result = exec::run_script(&request, &context_vars)?;

    match result.lines {
        Some(lines) => {
            exchange.publish(&name, lines);
            Ok(Some(name))
        }
        None => Ok(None),
    }
}

/// Pick the task to run: `--task` if given, otherwise the only defined task.
fn select_task(args: &CliArgs, cfg: &ConfigFile) -> Result<String> {
    if let Some(name) = &args.task {
        return Ok(name.clone());
    }
    let mut names = cfg.task.keys();
    match (names.next(), names.next()) {
        (Some(only), None) => Ok(only.clone()),
        _ => Err(ScriptrunError::ConfigError(
            "--task is required when the config defines more than one task".to_string(),
        )),
    }
}

/// Parse repeated `--var KEY=VALUE` flags into a context-variable map.
fn parse_context_vars(raw: &[String]) -> Result<BTreeMap<String, String>> {
    let mut vars = BTreeMap::new();
    for pair in raw {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(ScriptrunError::ConfigError(format!(
                "invalid --var '{pair}' (expected KEY=VALUE)"
            )));
        };
        if key.is_empty() {
            return Err(ScriptrunError::ConfigError(format!(
                "invalid --var '{pair}' (empty key)"
            )));
        }
        vars.insert(key.to_string(), value.to_string());
    }
    Ok(vars)
}

/// Simple dry-run output: print tasks and their effective settings.
fn print_dry_run(cfg: &ConfigFile) {
    println!("scriptrun dry-run");
    println!();

    println!("tasks ({}):", cfg.task.len());
    for (name, task) in cfg.task.iter() {
        println!("  - {name}");
        println!("      command: {}", task.command.trim_end());
        if let Some(ref env) = task.env {
            println!("      env: {} explicit entries", env.len());
        }
        println!(
            "      capture_output: {}",
            task.effective_capture(&cfg.default)
        );
        println!(
            "      output_encoding: {}",
            task.effective_encoding(&cfg.default)
        );
    }

    debug!("dry-run complete (no execution)");
}
