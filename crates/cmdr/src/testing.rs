//! Test doubles for the prompt and execution capabilities

use cmdr_core::process::ShellError;
use std::collections::VecDeque;
use std::io;

use crate::exec::{ExecError, Executor, Exit};
use crate::output::Printer;
use crate::prompt::Prompter;

/// Answers prompts from a fixed script, the way a user typing them would
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    defaults: Vec<Option<String>>,
    asked: usize,
}

impl ScriptedPrompter {
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            defaults: Vec::new(),
            asked: 0,
        }
    }

    pub fn confirming(answers: impl IntoIterator<Item = bool>) -> Self {
        Self::new(answers.into_iter().map(|yes| if yes { "y" } else { "n" }))
    }

    /// Number of prompts shown so far
    pub fn asked(&self) -> usize {
        self.asked
    }

    /// Defaults offered to each text prompt, in order
    pub fn defaults(&self) -> &[Option<String>] {
        &self.defaults
    }

    fn next_answer(&mut self) -> io::Result<String> {
        self.asked += 1;
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "prompt script exhausted"))
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, _message: &str, default: Option<&str>) -> io::Result<String> {
        self.defaults.push(default.map(String::from));
        let answer = self.next_answer()?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn confirm(&mut self, _message: &str, default: bool) -> io::Result<bool> {
        let answer = self.next_answer()?;
        if answer.is_empty() {
            return Ok(default);
        }
        Ok(answer == "y" || answer == "yes")
    }
}

/// Records commands instead of running them
pub struct RecordingExecutor {
    pub ran: Vec<String>,
    /// Exit code to report, `None` to fail as if the shell could not start
    code: Option<i32>,
}

impl RecordingExecutor {
    pub fn exiting(code: i32) -> Self {
        Self {
            ran: Vec::new(),
            code: Some(code),
        }
    }

    pub fn failing_to_spawn() -> Self {
        Self {
            ran: Vec::new(),
            code: None,
        }
    }
}

impl Executor for RecordingExecutor {
    fn execute(&mut self, command: &str) -> Result<Exit, ExecError> {
        self.ran.push(command.to_string());
        match self.code {
            Some(code) => Ok(Exit { code: Some(code) }),
            None => Err(ExecError::Shell(ShellError::Spawn {
                shell: "sh",
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            })),
        }
    }
}

pub fn output_of(printer: Printer<Vec<u8>>) -> String {
    String::from_utf8(printer.into_inner()).expect("printer output is UTF-8")
}
