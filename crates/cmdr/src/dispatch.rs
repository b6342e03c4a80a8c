//! Routing one invocation to the operation it names
//!
//! Each process handles exactly one action and exits with the status
//! returned by [`Dispatcher::dispatch`].

use std::io::{self, Write};

use crate::commands::{self, CommandError};
use crate::exec::Executor;
use crate::output::Printer;
use crate::prompt::Prompter;
use crate::store::AliasStore;

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add {
        alias: String,
        command: Option<String>,
    },
    List,
    Edit {
        alias: String,
    },
    Delete {
        alias: String,
    },
    /// Any first token that is not a built-in command
    Run {
        alias: String,
        extra: Vec<String>,
    },
}

/// Wires the store, prompter, executor and output together
pub struct Dispatcher<P, E, W> {
    store: AliasStore,
    prompter: P,
    executor: E,
    printer: Printer<W>,
}

impl<P: Prompter, E: Executor, W: Write> Dispatcher<P, E, W> {
    pub fn new(store: AliasStore, prompter: P, executor: E, printer: Printer<W>) -> Self {
        Self {
            store,
            prompter,
            executor,
            printer,
        }
    }

    /// Perform `action` and return the process exit status.
    ///
    /// User-facing failures are printed here and mapped to a non-zero
    /// status. Only a broken terminal surfaces as `Err`.
    pub fn dispatch(&mut self, action: Action) -> io::Result<i32> {
        tracing::debug!(?action, store = %self.store.path().display(), "dispatching");

        let result = match action {
            Action::Add { alias, command } => commands::add(
                &self.store,
                &mut self.prompter,
                &mut self.printer,
                &alias,
                command,
            )
            .map(|_| 0),
            Action::List => commands::list(&self.store, &mut self.printer).map(|_| 0),
            Action::Edit { alias } => {
                commands::edit(&self.store, &mut self.prompter, &mut self.printer, &alias).map(|_| 0)
            }
            Action::Delete { alias } => {
                commands::delete(&self.store, &mut self.prompter, &mut self.printer, &alias).map(|_| 0)
            }
            Action::Run { alias, extra } => self.run(&alias, &extra),
        };

        match result {
            Ok(code) => Ok(code),
            Err(CommandError::Io(e)) => Err(e),
            Err(e) => {
                self.printer.error(&e)?;
                Ok(1)
            }
        }
    }

    /// Look up `alias` and execute its command with the terminal attached
    fn run(&mut self, alias: &str, extra: &[String]) -> Result<i32, CommandError> {
        let table = self.store.load();
        let command = table
            .get(alias)
            .ok_or_else(|| CommandError::NotFound(alias.to_string()))?;

        if !extra.is_empty() {
            self.printer
                .warning(format!("Ignoring extra arguments: {}", extra.join(" ")))?;
        }

        self.printer.info(format!("Executing command: {}", command))?;
        self.printer.flush()?;

        match self.executor.execute(command) {
            Ok(exit) if exit.success() => Ok(0),
            Ok(exit) => {
                tracing::warn!(alias, code = ?exit.code, "command failed");
                match exit.code {
                    Some(code) => {
                        self.printer
                            .error(format!("Command exited with status {}", code))?;
                        Ok(code)
                    }
                    None => {
                        self.printer.error("Command terminated by signal")?;
                        Ok(1)
                    }
                }
            }
            Err(e) => {
                self.printer.error(&e)?;
                Ok(1)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn executor(&self) -> &E {
        &self.executor
    }

    /// Consume the dispatcher, returning whatever was printed to
    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.printer.into_inner()
    }
}
