#![cfg(unix)]

use std::error::Error;
use std::path::Path;

use scriptrun::errors::ScriptrunError;
use scriptrun::exec::run_script;
use scriptrun_test_utils::builders::{RequestBuilder, context_vars};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn runs_inside_a_fresh_temp_directory() -> TestResult {
    let request = RequestBuilder::new("cwd", "pwd").capture().build();

    let result = run_script(&request, &context_vars(&[]))?;
    let lines = result.lines.ok_or("expected captured lines")?;
    let dir = lines.first().ok_or("expected a cwd line")?;

    assert!(dir.contains("scriptruntmp"), "unexpected cwd: {dir}");
    assert_ne!(Path::new(dir), std::env::current_dir()?);
    Ok(())
}

#[test]
fn temp_directory_is_removed_after_success() -> TestResult {
    let request = RequestBuilder::new("cleanup", "pwd").capture().build();

    let result = run_script(&request, &context_vars(&[]))?;
    let lines = result.lines.ok_or("expected captured lines")?;
    let dir = lines.first().ok_or("expected a cwd line")?;

    assert!(
        !Path::new(dir).exists(),
        "temp dir still exists after run: {dir}"
    );
    Ok(())
}

#[test]
fn temp_directory_is_removed_after_failure() -> TestResult {
    // Captured output is discarded on failure, so have the script report its
    // cwd through a file owned by the test instead.
    let out_dir = tempfile::tempdir()?;
    let out_file = out_dir.path().join("cwd");

    let request = RequestBuilder::new("cleanup-fail", "pwd > \"$OUT_FILE\"\nexit 3").build();
    let vars = context_vars(&[("OUT_FILE", &out_file.to_string_lossy())]);

    let result = run_script(&request, &vars);
    assert!(matches!(result, Err(ScriptrunError::CommandFailed)));

    let dir = std::fs::read_to_string(&out_file)?;
    let dir = dir.trim();
    assert!(dir.contains("scriptruntmp"), "unexpected cwd: {dir}");
    assert!(
        !Path::new(dir).exists(),
        "temp dir still exists after failed run: {dir}"
    );
    Ok(())
}

#[test]
fn script_file_carries_the_task_id_prefix() -> TestResult {
    let request = RequestBuilder::new("prefixtask", "ls").capture().build();

    let result = run_script(&request, &context_vars(&[]))?;
    let lines = result.lines.ok_or("expected captured lines")?;

    assert_eq!(lines.len(), 1, "temp dir should contain only the script");
    assert!(
        lines[0].starts_with("prefixtask"),
        "unexpected script name: {}",
        lines[0]
    );
    Ok(())
}
