// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `scriptrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "scriptrun",
    version,
    about = "Run a shell-script task in an isolated temp directory and capture its output.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task definition file (TOML).
    ///
    /// Default: `Scriptrun.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Scriptrun.toml")]
    pub config: String,

    /// Name of the task to run.
    ///
    /// May be omitted when the config defines exactly one task.
    #[arg(long, value_name = "NAME")]
    pub task: Option<String>,

    /// Context variable exported into the child environment (repeatable).
    ///
    /// Context variables override same-named entries of the task's explicit
    /// `env` mapping as well as inherited variables.
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SCRIPTRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the tasks, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
