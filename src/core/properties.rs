// src/core/properties.rs

//! Reads the player capacity from a host's `server.properties` file.

use crate::core::StatusError;
use crate::core::providers::MaxPlayersProvider;
use std::fs;
use std::path::{Path, PathBuf};

/// The key holding the player capacity.
pub const MAX_PLAYERS_KEY: &str = "max-players";

/// A `MaxPlayersProvider` backed by an INI-style `key=value` file.
///
/// The file is re-read on every call so edits are picked up without a restart.
#[derive(Debug, Clone)]
pub struct ServerProperties {
    path: PathBuf,
}

impl ServerProperties {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the raw value of `key`, or `None` if the file does not define it.
    pub fn get(&self, key: &str) -> Result<Option<String>, StatusError> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            StatusError::ConfigRead(format!("cannot read '{}': {e}", self.path.display()))
        })?;
        Ok(lookup(&contents, key).map(str::to_string))
    }
}

impl MaxPlayersProvider for ServerProperties {
    fn max_players(&self) -> Result<u32, StatusError> {
        let raw = self.get(MAX_PLAYERS_KEY)?.ok_or_else(|| {
            StatusError::ConfigRead(format!(
                "'{}' has no {MAX_PLAYERS_KEY} entry",
                self.path.display()
            ))
        })?;
        raw.parse::<u32>().map_err(|_| {
            StatusError::ConfigRead(format!("invalid {MAX_PLAYERS_KEY} value '{raw}'"))
        })
    }
}

/// Finds `key` in properties-style text. `#` and `!` start comment lines and the
/// first `=` or `:` separates key from value.
fn lookup<'a>(contents: &'a str, key: &str) -> Option<&'a str> {
    contents.lines().find_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            return None;
        }
        let (k, v) = line.split_once(['=', ':'])?;
        (k.trim() == key).then(|| v.trim())
    })
}
