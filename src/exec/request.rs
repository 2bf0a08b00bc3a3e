// src/exec/request.rs

//! Execution request and result types.

use std::collections::BTreeMap;
use std::str::FromStr;

/// Everything needed for one script invocation.
///
/// Constructed by the caller before each run and not mutated afterwards; the
/// runner owns no state across invocations.
#[derive(Debug, Clone)]
pub struct ExecutionRequest {
    /// Task identifier, used as the temp-file prefix and the exchange key.
    pub task_id: String,

    /// The script body to execute. May span multiple lines; it is handed to
    /// the shell verbatim, with no escaping or sanitization.
    pub command: String,

    /// Explicit environment for the child process.
    ///
    /// `None` means "inherit the current process environment". `Some` means
    /// the mapping is used *instead of* the inherited environment.
    pub env: Option<BTreeMap<String, String>>,

    /// Whether to accumulate output lines for return to the caller.
    pub capture_output: bool,

    /// Encoding used to decode the child's output bytes.
    pub output_encoding: OutputEncoding,
}

/// Result of a successful script invocation.
///
/// Produced once per run and handed back to the caller; the failure path
/// carries no partial output (the log trail does).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// The child's exit code (always 0 on this path).
    pub exit_code: i32,

    /// Captured output lines in arrival order, trailing whitespace stripped.
    /// `None` when capture was not requested.
    pub lines: Option<Vec<String>>,
}

/// Output encoding for the child's combined stream.
///
/// Only the UTF-8 family is supported; bytes are decoded lossily, the way
/// process output is decoded everywhere else in this codebase. The enum
/// exists so unsupported names are rejected up front rather than mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputEncoding {
    #[default]
    Utf8,
}

impl OutputEncoding {
    /// Decode one raw output line.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            OutputEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

impl FromStr for OutputEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(OutputEncoding::Utf8),
            other => Err(format!(
                "unsupported output encoding: {other} (expected \"utf-8\")"
            )),
        }
    }
}
