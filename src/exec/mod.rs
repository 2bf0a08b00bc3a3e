// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running a task's script body as a
//! child process, using `std::process::Command`, and streaming its combined
//! output into `tracing`.
//!
//! - [`request`] holds the [`ExecutionRequest`] / [`RunResult`] types.
//! - [`env`] resolves the child's effective environment.
//! - [`runner`] owns the blocking run loop: temp dir, spawn, drain, wait.

pub mod env;
pub mod request;
pub mod runner;

pub use request::{ExecutionRequest, OutputEncoding, RunResult};
pub use runner::run_script;
