// src/exec/env.rs

//! Effective child-process environment resolution.

use std::collections::BTreeMap;

/// Resolve the environment the child process will see.
///
/// - With no explicit mapping, start from the current process environment.
/// - With an explicit mapping, use exactly that mapping (inherited variables
///   are *not* visible to the child).
/// - Context variables are merged in last and win on key collision.
pub fn effective_environment(
    explicit: Option<&BTreeMap<String, String>>,
    context_vars: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut env = match explicit {
        Some(mapping) => mapping.clone(),
        None => std::env::vars().collect(),
    };

    for (key, value) in context_vars {
        env.insert(key.clone(), value.clone());
    }

    env
}
