//! Interactive prompts
//!
//! Commands never read the terminal directly; they ask a [`Prompter`].

use std::io::{self, BufRead, Stdout, Write};

/// Source of answers to interactive questions
pub trait Prompter {
    /// Ask for a line of text. An empty answer yields `default` when given.
    fn text(&mut self, message: &str, default: Option<&str>) -> io::Result<String>;

    /// Ask a yes/no question. An empty answer yields `default`.
    fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool>;
}

/// Prompter reading answers line by line from a terminal
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, Stdout> {
    /// Prompt on stdout, read from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one answer, without the line terminator. EOF reads as empty.
    fn read_answer(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn text(&mut self, message: &str, default: Option<&str>) -> io::Result<String> {
        match default {
            Some(default) => write!(self.output, "? {} ({}) ", message, default)?,
            None => write!(self.output, "? {} ", message)?,
        }
        self.output.flush()?;

        let answer = self.read_answer()?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        write!(self.output, "? {} ({}) ", message, hint)?;
        self.output.flush()?;

        let answer = self.read_answer()?;
        if answer.is_empty() {
            return Ok(default);
        }
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}
