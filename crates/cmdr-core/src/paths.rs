//! Standard paths used by cmdr

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// File name of the alias table, stored directly under the home directory
pub const ALIAS_FILE_NAME: &str = ".custom-commands.json";

/// Standard cmdr paths
#[derive(Debug, Clone)]
pub struct Paths {
    /// Alias table (~/.custom-commands.json)
    pub aliases: PathBuf,
}

impl Paths {
    /// Resolve paths from the current user's home directory
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow!("Could not determine the home directory"))?;
        Ok(Self::with_home(&home))
    }

    /// Build paths rooted at an explicit home directory (for testing)
    pub fn with_home(home: &Path) -> Self {
        Self {
            aliases: home.join(ALIAS_FILE_NAME),
        }
    }
}
