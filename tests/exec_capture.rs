#![cfg(unix)]

use std::error::Error;

use scriptrun::exec::run_script;
use scriptrun_test_utils::builders::{RequestBuilder, context_vars};
use scriptrun_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn captures_lines_in_order() -> TestResult {
    init_tracing();

    let request = RequestBuilder::new("capture", "echo one\necho two\nexit 0")
        .capture()
        .build();

    let result = run_script(&request, &context_vars(&[]))?;
    assert_eq!(result.exit_code, 0);
    assert_eq!(
        result.lines,
        Some(vec!["one".to_string(), "two".to_string()])
    );
    Ok(())
}

#[test]
fn stderr_is_merged_into_the_captured_stream() -> TestResult {
    init_tracing();

    let request = RequestBuilder::new("merged", "echo out\necho err >&2")
        .capture()
        .build();

    let result = run_script(&request, &context_vars(&[]))?;
    assert_eq!(
        result.lines,
        Some(vec!["out".to_string(), "err".to_string()])
    );
    Ok(())
}

#[test]
fn trailing_whitespace_is_stripped() -> TestResult {
    let request = RequestBuilder::new("padded", r"printf 'padded   \n'")
        .capture()
        .build();

    let result = run_script(&request, &context_vars(&[]))?;
    assert_eq!(result.lines, Some(vec!["padded".to_string()]));
    Ok(())
}

#[test]
fn final_line_without_newline_is_still_captured() -> TestResult {
    let request = RequestBuilder::new("nonewline", "printf 'no newline'")
        .capture()
        .build();

    let result = run_script(&request, &context_vars(&[]))?;
    assert_eq!(result.lines, Some(vec!["no newline".to_string()]));
    Ok(())
}

#[test]
fn capture_disabled_returns_no_lines() -> TestResult {
    let request = RequestBuilder::new("nocapture", "echo ignored").build();

    let result = run_script(&request, &context_vars(&[]))?;
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.lines, None);
    Ok(())
}
