//! Operations on the alias table: add, list, edit and delete
//!
//! Every operation loads the table fresh and, if it changed anything,
//! writes the whole table back before reporting success.

use std::io::{self, Write};
use thiserror::Error;

use crate::output::Printer;
use crate::prompt::Prompter;
use crate::store::{AliasStore, StoreError};

/// Sub-command names that take precedence over aliases on the command line
pub const BUILTIN_COMMANDS: &[&str] = &["add", "list", "edit", "delete", "help"];

/// Command operation errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Command \"{0}\" not found.")]
    NotFound(String),

    #[error("Alias name cannot be empty.")]
    EmptyAlias,

    #[error("Command for \"{0}\" cannot be empty.")]
    EmptyCommand(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    Removed,
    Cancelled,
}

/// Store `alias`, prompting for the command text when none is given.
///
/// An existing alias is overwritten after a warning. Returns whether an
/// existing command was replaced.
pub fn add<W: Write>(
    store: &AliasStore,
    prompter: &mut dyn Prompter,
    printer: &mut Printer<W>,
    alias: &str,
    command: Option<String>,
) -> Result<bool, CommandError> {
    let alias = alias.trim();
    if alias.is_empty() {
        return Err(CommandError::EmptyAlias);
    }

    let mut table = store.load();
    let overwriting = table.contains(alias);
    if overwriting {
        printer.warning(format!("Overwriting existing command for alias \"{}\"", alias))?;
    }
    if BUILTIN_COMMANDS.contains(&alias) {
        printer.warning(format!(
            "\"{}\" is also a built-in command, so it cannot be run by name",
            alias
        ))?;
    }

    let command = match command {
        Some(command) => command,
        None => {
            printer.flush()?;
            prompter.text("Enter the command or command sequence:", None)?
        }
    };
    if command.trim().is_empty() {
        return Err(CommandError::EmptyCommand(alias.to_string()));
    }

    table.insert(alias, command);
    store.save(&table)?;
    tracing::info!(alias, overwriting, "alias added");

    printer.success(format!("Command \"{}\" added successfully.", alias))?;
    Ok(overwriting)
}

/// Print every alias with its command. Returns the number listed.
pub fn list<W: Write>(store: &AliasStore, printer: &mut Printer<W>) -> Result<usize, CommandError> {
    let table = store.load();
    if table.is_empty() {
        printer.notice("No custom commands found.")?;
        return Ok(0);
    }

    printer.info("Custom Commands:")?;
    for (alias, command) in table.iter() {
        printer.entry(alias, command)?;
    }
    Ok(table.len())
}

/// Replace the command stored under an existing alias.
///
/// The prompt defaults to the current command, so an empty answer keeps it.
pub fn edit<W: Write>(
    store: &AliasStore,
    prompter: &mut dyn Prompter,
    printer: &mut Printer<W>,
    alias: &str,
) -> Result<(), CommandError> {
    let mut table = store.load();
    let current = table
        .get(alias)
        .ok_or_else(|| CommandError::NotFound(alias.to_string()))?
        .to_string();

    printer.flush()?;
    let command = prompter.text("Enter the new command or command sequence:", Some(&current))?;
    if command.trim().is_empty() {
        return Err(CommandError::EmptyCommand(alias.to_string()));
    }

    table.insert(alias, command);
    store.save(&table)?;
    tracing::info!(alias, "alias updated");

    printer.success(format!("Command \"{}\" updated successfully.", alias))?;
    Ok(())
}

/// Remove an alias after the user confirms
pub fn delete<W: Write>(
    store: &AliasStore,
    prompter: &mut dyn Prompter,
    printer: &mut Printer<W>,
    alias: &str,
) -> Result<Deletion, CommandError> {
    let mut table = store.load();
    if !table.contains(alias) {
        return Err(CommandError::NotFound(alias.to_string()));
    }

    printer.flush()?;
    let confirmed = prompter.confirm(
        &format!("Are you sure you want to delete the command \"{}\"?", alias),
        false,
    )?;
    if !confirmed {
        printer.notice("Deletion cancelled.")?;
        return Ok(Deletion::Cancelled);
    }

    table.remove(alias);
    store.save(&table)?;
    tracing::info!(alias, "alias deleted");

    printer.success(format!("Command \"{}\" deleted successfully.", alias))?;
    Ok(Deletion::Removed)
}
