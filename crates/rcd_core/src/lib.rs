//! rcd Core Library
//!
//! The state-bearing half of rcd, a shell helper for changing directories
//! through external pickers:
//! - A persistent directory-history store (deduplicated, validated, size-bounded)
//! - Pure shell-directive builders for the plain/fuzzy/repo/history modes
//! - Path construction and TOML configuration
//!
//! The CLI crate sources the environment (home directory, current
//! directory) exactly once and passes it in; nothing here reads environment
//! variables or changes the process's working directory.
//!
//! # Quick Start
//!
//! ```
//! use rcd_core::{HistoryConfig, HistoryStore};
//! use tempfile::TempDir;
//!
//! let tmp = TempDir::new().unwrap();
//! let store = HistoryStore::new(tmp.path().join("history"), HistoryConfig::default());
//!
//! // Record a visited directory; it becomes the most recent entry.
//! let dir = tmp.path().display().to_string();
//! store.record(&dir).unwrap();
//!
//! let recent: Vec<String> = store.recent().unwrap().collect();
//! assert_eq!(recent, vec![dir]);
//! ```

mod config;
mod error;
mod history;
mod paths;
mod shell;

pub mod directive;

pub use config::{Config, HistoryConfig};
pub use error::{RcdError, Result};
pub use history::HistoryStore;
pub use paths::{config_file, history_file, HISTORY_FILE_NAME};
pub use shell::init_snippet;
