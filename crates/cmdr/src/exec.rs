//! Executing stored commands

use cmdr_core::process::{self, ShellError};
use thiserror::Error;

/// Why a command could not be run at all
#[derive(Error, Debug)]
pub enum ExecError {
    #[error(transparent)]
    Shell(#[from] ShellError),
}

/// How a finished command exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit {
    /// Exit code, `None` if the command was killed by a signal
    pub code: Option<i32>,
}

impl Exit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs command text with the terminal's stdio attached
pub trait Executor {
    fn execute(&mut self, command: &str) -> Result<Exit, ExecError>;
}

/// Executor handing commands to the host shell
#[derive(Debug, Default)]
pub struct ShellExecutor;

impl Executor for ShellExecutor {
    fn execute(&mut self, command: &str) -> Result<Exit, ExecError> {
        let status = process::run_shell(command)?;
        Ok(Exit {
            code: status.code(),
        })
    }
}
