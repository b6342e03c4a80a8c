//! cmdr core - Shared plumbing for the cmdr alias manager
//!
//! Locates the alias file and hands command strings to the host shell.

pub mod paths;
pub mod process;

pub use paths::Paths;
