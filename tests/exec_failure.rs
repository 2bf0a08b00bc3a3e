#![cfg(unix)]

use scriptrun::errors::ScriptrunError;
use scriptrun::exec::run_script;
use scriptrun_test_utils::builders::{RequestBuilder, context_vars};
use scriptrun_test_utils::init_tracing;

#[test]
fn nonzero_exit_fails() {
    init_tracing();

    let request = RequestBuilder::new("fail", "exit 3").build();

    let result = run_script(&request, &context_vars(&[]));
    match result {
        Err(ScriptrunError::CommandFailed) => {}
        other => panic!("expected CommandFailed, got: {other:?}"),
    }
}

#[test]
fn output_before_failure_is_not_returned() {
    let request = RequestBuilder::new("partial", "echo partial\nexit 1")
        .capture()
        .build();

    let result = run_script(&request, &context_vars(&[]));
    assert!(matches!(result, Err(ScriptrunError::CommandFailed)));
}

#[test]
fn signal_termination_collapses_to_the_same_error() {
    let request = RequestBuilder::new("killed", "kill -9 $$").build();

    let result = run_script(&request, &context_vars(&[]));
    assert!(matches!(result, Err(ScriptrunError::CommandFailed)));
}

#[test]
fn failure_message_is_generic() {
    let request = RequestBuilder::new("fail", "exit 42").build();

    let err = match run_script(&request, &context_vars(&[])) {
        Err(err) => err,
        Ok(_) => panic!("expected an error for exit 42"),
    };
    assert_eq!(err.to_string(), "Shell command failed");
}

#[test]
fn zero_exit_never_fails() {
    for capture in [false, true] {
        let mut builder = RequestBuilder::new("ok", "true");
        if capture {
            builder = builder.capture();
        }
        let result = run_script(&builder.build(), &context_vars(&[]));
        assert!(result.is_ok(), "capture={capture}: {result:?}");
    }
}
