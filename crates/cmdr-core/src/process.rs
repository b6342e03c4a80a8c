//! Host shell invocation

use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

/// Errors raised before the child command gets to run
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Failed to start shell '{shell}': {source}")]
    Spawn {
        shell: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Shell program and flag used to interpret a command string
fn shell() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}

/// Run `command` through the host shell and wait for it to finish.
///
/// The child inherits stdin, stdout and stderr, so interactive programs
/// behave exactly as if they were started from the terminal.
pub fn run_shell(command: &str) -> Result<ExitStatus, ShellError> {
    let (program, flag) = shell();
    tracing::debug!(shell = program, command, "spawning shell");

    let status = Command::new(program)
        .args([flag, command])
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| ShellError::Spawn {
            shell: program,
            source,
        })?;

    tracing::debug!(code = ?status.code(), "shell exited");
    Ok(status)
}
