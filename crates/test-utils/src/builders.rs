#![allow(dead_code)]

use std::collections::BTreeMap;

use scriptrun::exec::{ExecutionRequest, OutputEncoding};

/// Builder for `ExecutionRequest` to simplify test setup.
pub struct RequestBuilder {
    request: ExecutionRequest,
}

impl RequestBuilder {
    pub fn new(task_id: &str, command: &str) -> Self {
        Self {
            request: ExecutionRequest {
                task_id: task_id.to_string(),
                command: command.to_string(),
                env: None,
                capture_output: false,
                output_encoding: OutputEncoding::default(),
            },
        }
    }

    pub fn capture(mut self) -> Self {
        self.request.capture_output = true;
        self
    }

    /// Switch to an explicit environment mapping (replacing inheritance),
    /// starting empty if none was set yet.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.request
            .env
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn encoding(mut self, encoding: OutputEncoding) -> Self {
        self.request.output_encoding = encoding;
        self
    }

    pub fn build(self) -> ExecutionRequest {
        self.request
    }
}

/// Context-variable map from `(key, value)` pairs.
pub fn context_vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
