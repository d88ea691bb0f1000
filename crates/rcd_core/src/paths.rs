//! Path construction for the user-scoped files rcd owns.
//!
//! The home directory is always an explicit parameter. Nothing in this crate
//! reads `$HOME`, `$PWD`, or the process working directory; the CLI sources
//! those once and passes them down.

use std::path::{Path, PathBuf};

/// Name of the history dotfile under the user's home directory.
pub const HISTORY_FILE_NAME: &str = ".rcd_history";

/// Returns the history file path: `<home>/.rcd_history`.
///
/// This location is fixed; the history path is deliberately not
/// configurable.
pub fn history_file(home: impl AsRef<Path>) -> PathBuf {
    home.as_ref().join(HISTORY_FILE_NAME)
}

/// Returns the config file path: `<home>/.config/rcd/config.toml`.
pub fn config_file(home: impl AsRef<Path>) -> PathBuf {
    home.as_ref().join(".config").join("rcd").join("config.toml")
}
