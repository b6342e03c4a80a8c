//! The alias table - every alias the user has registered
//!
//! Serialized as a flat JSON object of alias -> command text. Entries keep
//! the order they were first added in, which is also the order they appear
//! on disk.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a JSON object is not a valid alias table
#[derive(Error, Debug)]
pub enum TableFormatError {
    #[error("alias names cannot be empty")]
    EmptyAlias,

    #[error("command for \"{0}\" is not a string")]
    NotAString(String),
}

/// Mapping from alias name to the shell command it stands for.
///
/// Every value is a non-blank string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct AliasTable {
    entries: Map<String, Value>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the command stored under an alias
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).and_then(Value::as_str)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    /// Set the command for an alias, returning the previous command if any.
    ///
    /// Overwriting keeps the alias in its original position.
    pub fn insert(&mut self, alias: impl Into<String>, command: impl Into<String>) -> Option<String> {
        match self.entries.insert(alias.into(), Value::String(command.into())) {
            Some(Value::String(previous)) => Some(previous),
            _ => None,
        }
    }

    /// Remove an alias, returning its command if it was present
    pub fn remove(&mut self, alias: &str) -> Option<String> {
        match self.entries.shift_remove(alias) {
            Some(Value::String(previous)) => Some(previous),
            _ => None,
        }
    }

    /// Iterate over `(alias, command)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(alias, command)| Some((alias.as_str(), command.as_str()?)))
    }
}

impl<A: Into<String>, C: Into<String>> FromIterator<(A, C)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (A, C)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (alias, command) in iter {
            table.insert(alias, command);
        }
        table
    }
}

impl TryFrom<Map<String, Value>> for AliasTable {
    type Error = TableFormatError;

    /// Validate a parsed JSON object.
    ///
    /// Blank commands can never run, so those entries are dropped rather
    /// than kept around as aliases that look present.
    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut entries = Map::new();
        for (alias, command) in map {
            if alias.trim().is_empty() {
                return Err(TableFormatError::EmptyAlias);
            }
            let Value::String(command) = command else {
                return Err(TableFormatError::NotAString(alias));
            };
            if command.trim().is_empty() {
                tracing::warn!(alias = %alias, "dropping alias with a blank command");
                continue;
            }
            entries.insert(alias, Value::String(command));
        }
        Ok(Self { entries })
    }
}

impl Serialize for AliasTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
