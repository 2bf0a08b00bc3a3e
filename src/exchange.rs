// src/exchange.rs

//! Cross-task output exchange.
//!
//! After a capture-enabled run, the caller publishes the captured lines under
//! the task identifier so downstream consumers can read them. The runner
//! itself never publishes; it only returns lines.

use std::collections::BTreeMap;

/// Where captured output lines get published.
///
/// The in-process implementation is [`MemoryExchange`]; an embedding
/// orchestrator can provide its own (e.g. one backed by its metadata store).
pub trait OutputExchange {
    /// Publish the captured lines of one task run, replacing any previous
    /// value under the same task id.
    fn publish(&mut self, task_id: &str, lines: Vec<String>);

    /// Fetch the most recently published lines for a task, if any.
    fn fetch(&self, task_id: &str) -> Option<&[String]>;
}

/// Simple in-memory exchange keyed by task id.
#[derive(Debug, Default)]
pub struct MemoryExchange {
    values: BTreeMap<String, Vec<String>>,
}

impl MemoryExchange {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputExchange for MemoryExchange {
    fn publish(&mut self, task_id: &str, lines: Vec<String>) {
        self.values.insert(task_id.to_string(), lines);
    }

    fn fetch(&self, task_id: &str) -> Option<&[String]> {
        self.values.get(task_id).map(Vec::as_slice)
    }
}
