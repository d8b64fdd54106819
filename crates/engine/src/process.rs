//! Blocking subprocess execution
//!
//! Commands are split into words without invoking a shell and started with
//! duct. A non-zero exit is reported as [`ExecutionResult::Failed`], never as
//! an error: errors are reserved for commands that could not be parsed or
//! started at all.

use hook_mux_core::{Error, Result};
use std::process::ExitStatus;

/// Exit status of a finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionResult {
    /// Exited with status 0
    Success,
    /// Exited with the given non-zero status
    Failed(i32),
}

impl ExecutionResult {
    /// Translate a process exit status
    ///
    /// A process terminated by signal `N` reports `128 + N`, the way a
    /// POSIX shell does.
    pub fn from_status(status: ExitStatus) -> Self {
        if status.success() {
            return Self::Success;
        }

        if let Some(code) = status.code() {
            return Self::Failed(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::Failed(128 + signal);
            }
        }

        Self::Failed(1)
    }
}

/// Result of a command whose standard output was captured
#[derive(Debug, Clone)]
pub struct Captured {
    /// How the command exited
    pub result: ExecutionResult,
    /// Everything written to stdout, lossily decoded
    pub stdout: String,
}

/// Split a command line into words using shell quoting rules
///
/// Handles: `git commit -m "Initial commit"` → `["git", "commit", "-m", "Initial commit"]`
///
/// # Errors
///
/// Returns [`Error::CommandParse`] for unbalanced quotes or a trailing
/// escape.
pub fn split_command(command: &str) -> Result<Vec<String>> {
    shell_words::split(command).map_err(|source| Error::CommandParse {
        command: command.to_string(),
        source,
    })
}

/// Run `argv` with stdout and stderr connected to ours and wait for it
///
/// # Errors
///
/// Returns an error if `argv` is empty or the program cannot be started.
#[tracing::instrument(level = "debug")]
pub fn run_inherited(argv: &[String]) -> Result<ExecutionResult> {
    let (program, args) = split_program(argv)?;

    let output = duct::cmd(program, args)
        .unchecked()
        .run()
        .map_err(|source| spawn_err(program, source))?;

    let result = ExecutionResult::from_status(output.status);
    tracing::debug!(?result, "Command finished");
    Ok(result)
}

/// Run `argv` capturing stdout, with stderr passed through, and wait for it
///
/// # Errors
///
/// Returns an error if `argv` is empty or the program cannot be started.
#[tracing::instrument(level = "debug")]
pub fn run_captured(argv: &[String]) -> Result<Captured> {
    let (program, args) = split_program(argv)?;

    let output = duct::cmd(program, args)
        .stdout_capture()
        .unchecked()
        .run()
        .map_err(|source| spawn_err(program, source))?;

    let result = ExecutionResult::from_status(output.status);
    tracing::debug!(?result, bytes = output.stdout.len(), "Command finished");
    Ok(Captured {
        result,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    })
}

fn split_program(argv: &[String]) -> Result<(&String, &[String])> {
    argv.split_first()
        .ok_or_else(|| Error::Message("Empty command".to_string()))
}

fn spawn_err(program: &str, source: std::io::Error) -> Error {
    Error::Spawn {
        program: program.to_string(),
        source,
    }
}
