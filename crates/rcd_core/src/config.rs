//! Configuration types for rcd.

use crate::error::{RcdError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration, loaded from `<home>/.config/rcd/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// History store configuration.
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Load configuration from a file.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// read or parsed is an error, never silently replaced with defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| RcdError::Config {
            path: path.to_path_buf(),
            reason: format!("failed to read config: {}", e),
        })?;
        toml::from_str(&content).map_err(|e| RcdError::Config {
            path: path.to_path_buf(),
            reason: format!("failed to parse config: {}", e),
        })
    }
}

/// History store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of entries the history file may hold after a rewrite
    /// (default: unbounded). When set, the oldest surviving entries are
    /// dropped first.
    pub max_entries: Option<usize>,
}
