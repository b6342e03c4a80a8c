//! Terminal messages
//!
//! Errors, warnings and successes are prefixed and colored so they can be
//! told apart at a glance.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Stdout, Write};

/// Writes user-facing messages
pub struct Printer<W> {
    out: W,
}

impl Printer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn error(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", format!("Error: {}", message).red())
    }

    pub fn warning(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", format!("Warning: {}", message).yellow())
    }

    pub fn success(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", message.to_string().green())
    }

    pub fn info(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", message.to_string().blue())
    }

    /// Neutral notice that is neither an error nor a success
    pub fn notice(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", message.to_string().yellow())
    }

    /// One `alias: command` line
    pub fn entry(&mut self, alias: &str, command: &str) -> io::Result<()> {
        writeln!(self.out, "{}: {}", alias.green(), command)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        colored::control::set_override(false);

        let mut printer = Printer::new(Vec::new());
        printer.error("boom").unwrap();
        printer.warning("careful").unwrap();
        printer.success("done").unwrap();
        printer.entry("greet", "echo hello").unwrap();

        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(
            text,
            "Error: boom\nWarning: careful\ndone\ngreet: echo hello\n"
        );
    }
}
