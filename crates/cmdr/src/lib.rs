//! cmdr - Personal command aliases
//!
//! Register a shell command under a short name once, then run it by name.
//! Aliases live in `~/.custom-commands.json`.

pub mod commands;
pub mod dispatch;
pub mod exec;
pub mod output;
pub mod prompt;
pub mod store;
pub mod table;

#[cfg(test)]
mod testing;

pub use commands::{CommandError, Deletion};
pub use dispatch::{Action, Dispatcher};
pub use exec::{Executor, ShellExecutor};
pub use output::Printer;
pub use prompt::{Prompter, TerminalPrompter};
pub use store::{AliasStore, StoreError};
pub use table::AliasTable;
