//! Persistent storage for the alias table
//!
//! The whole table lives in a single JSON file. It is read in full at the
//! start of every invocation and rewritten in full after every change.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::table::AliasTable;

/// Errors raised while persisting the alias table
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to save commands to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize commands: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Store backed by one JSON file
#[derive(Debug, Clone)]
pub struct AliasStore {
    path: PathBuf,
}

impl AliasStore {
    /// Create a store reading and writing `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the table.
    ///
    /// A missing, unreadable or malformed file yields an empty table. The
    /// reason is only reported through tracing.
    pub fn load(&self) -> AliasTable {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no alias file yet, starting empty");
                return AliasTable::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "alias file unreadable, starting empty");
                return AliasTable::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "alias file is not valid, starting empty");
                AliasTable::new()
            }
        }
    }

    /// Overwrite the backing file with the full table
    pub fn save(&self, table: &AliasTable) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(table)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), entries = table.len(), "saved alias file");
        Ok(())
    }
}
