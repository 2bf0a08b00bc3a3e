// src/exec/runner.rs

//! Blocking script execution in an isolated temporary directory.
//!
//! One invocation is exactly one child process: the script body is written to
//! a temp file, executed through the platform shell with the temp directory
//! as cwd, and its combined output is drained line-by-line until EOF. The
//! temp directory (and the script inside it) is removed on every exit path
//! via `TempDir`'s drop.

use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::errors::{Result, ScriptrunError};
use crate::exec::env::effective_environment;
use crate::exec::request::{ExecutionRequest, RunResult};

/// Run a single script invocation.
///
/// Blocks until the child exits. Fails with [`ScriptrunError::CommandFailed`]
/// on a non-zero exit status; on that path no captured output is returned
/// (the log trail carries every line either way). Lower-level IO failures
/// (temp dir creation, pipe reads) propagate as [`ScriptrunError::IoError`].
pub fn run_script(
    request: &ExecutionRequest,
    context_vars: &BTreeMap<String, String>,
) -> Result<RunResult> {
    let env = effective_environment(request.env.as_ref(), context_vars);
    debug!(
        task = %request.task_id,
        context_vars = context_vars.len(),
        "resolved child environment"
    );

    let tmp_dir = tempfile::Builder::new().prefix("scriptruntmp").tempdir()?;
    info!(
        task = %request.task_id,
        dir = %tmp_dir.path().display(),
        "temporary working directory created"
    );

    let mut script = tempfile::Builder::new()
        .prefix(&request.task_id)
        .tempfile_in(tmp_dir.path())?;
    script.write_all(request.command.as_bytes())?;
    script.flush()?;
    info!(
        task = %request.task_id,
        script = %script.path().display(),
        "temporary script location"
    );

    let mut cmd = shell_command(script.path());
    cmd.current_dir(tmp_dir.path())
        .env_clear()
        .envs(&env)
        .stdout(Stdio::piped());
    prepare_child(&mut cmd);

    info!(task = %request.task_id, command = %request.command, "running command");
    let mut child = cmd.spawn()?;

    let mut buffer = if request.capture_output {
        Some(Vec::new())
    } else {
        None
    };

    // Drain the combined stream as it arrives rather than buffering until
    // exit; each decoded line goes to the log immediately.
    if let Some(stdout) = child.stdout.take() {
        let mut reader = BufReader::new(stdout);
        let mut raw = Vec::new();

        info!(task = %request.task_id, "output:");
        loop {
            raw.clear();
            let n = reader.read_until(b'\n', &mut raw)?;
            if n == 0 {
                break;
            }
            let decoded = request.output_encoding.decode(&raw);
            let line = decoded.trim_end();
            info!(task = %request.task_id, "{}", line);
            if let Some(buf) = buffer.as_mut() {
                buf.push(line.to_string());
            }
        }
    }

    let status = child.wait()?;
    let code = status.code().unwrap_or(-1);
    info!(
        task = %request.task_id,
        exit_code = code,
        success = status.success(),
        "command exited"
    );

    if !status.success() {
        return Err(ScriptrunError::CommandFailed);
    }

    Ok(RunResult {
        exit_code: code,
        lines: buffer,
    })
}

/// Build a shell command appropriate for the platform.
fn shell_command(script: &Path) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(script);
        c
    } else {
        let mut c = Command::new("bash");
        c.arg(script);
        c
    }
}

/// Configure the child side before `exec`:
///
/// - restore default dispositions for SIGPIPE and SIGXFSZ, which the parent
///   may have masked and which default to process termination
/// - `setsid()` so the child runs in its own session, detached from the
///   parent's process group
/// - dup2 stdout onto stderr so both streams arrive on the single pipe
#[cfg(unix)]
fn prepare_child(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;

    // SAFETY: only async-signal-safe calls between fork and exec.
    unsafe {
        cmd.pre_exec(|| {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
            libc::signal(libc::SIGXFSZ, libc::SIG_DFL);
            libc::setsid();
            if libc::dup2(libc::STDOUT_FILENO, libc::STDERR_FILENO) < 0 {
                return Err(std::io::Error::last_os_error());
            }
            Ok(())
        });
    }
}

/// No session/signal handling on non-Unix platforms; stderr stays on the
/// parent's stderr there.
#[cfg(not(unix))]
fn prepare_child(_cmd: &mut Command) {}
