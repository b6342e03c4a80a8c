//! cmdr - Personal command aliases
//!
//! "Type it once. Run it by name."
//!
//! Commands:
//! - add <ALIAS> [COMMAND...]: Store a command under an alias
//! - list: List all aliases
//! - edit <ALIAS>: Change the command behind an alias
//! - delete <ALIAS>: Remove an alias
//! - <ALIAS>: Run the command behind an alias

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use cmdr::{Action, AliasStore, Dispatcher, Printer, ShellExecutor, TerminalPrompter};
use cmdr_core::Paths;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cmdr")]
#[command(about = "CLI tool for managing custom commands and command sequences")]
#[command(version)]
#[command(after_help = "\
EXAMPLES:
    cmdr add greet                   Prompt for the command to store as 'greet'
    cmdr add ll ls -la               Store 'ls -la' as 'll' without prompting
    cmdr list                        Show all aliases
    cmdr edit greet                  Change the command (Enter keeps the current one)
    cmdr delete greet                Remove 'greet' after confirmation
    cmdr greet                       Run the command stored as 'greet'

STORAGE:
    Aliases are kept in ~/.custom-commands.json

LOGGING:
    Set RUST_LOG=debug to see where aliases are loaded from and saved to.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new custom command
    Add {
        /// Name to run the command by
        alias: String,

        /// Command text (prompted for when omitted)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// List all custom commands
    List,

    /// Edit an existing custom command
    Edit {
        /// Alias to edit
        alias: String,
    },

    /// Delete a custom command
    Delete {
        /// Alias to delete
        alias: String,
    },

    /// Run a custom command (default)
    #[command(external_subcommand)]
    Run(Vec<String>),
}

impl Commands {
    fn into_action(self) -> Option<Action> {
        let action = match self {
            Commands::Add { alias, command } => Action::Add {
                alias,
                command: (!command.is_empty()).then(|| command.join(" ")),
            },
            Commands::List => Action::List,
            Commands::Edit { alias } => Action::Edit { alias },
            Commands::Delete { alias } => Action::Delete { alias },
            Commands::Run(mut args) => {
                if args.is_empty() {
                    return None;
                }
                let alias = args.remove(0);
                Action::Run { alias, extra: args }
            }
        };
        Some(action)
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(action) = cli.command.and_then(Commands::into_action) else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let paths = Paths::new()?;
    let mut dispatcher = Dispatcher::new(
        AliasStore::new(paths.aliases),
        TerminalPrompter::stdio(),
        ShellExecutor,
        Printer::stdout(),
    );

    let code = dispatcher
        .dispatch(action)
        .context("Failed to talk to the terminal")?;

    Ok(ExitCode::from(exit_status(code)))
}

/// Map a child's status onto the narrower range a process can return
fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
