//! Error types for rcd_core operations.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rcd_core operations.
///
/// Per-entry stat failures while validating historical paths are not
/// represented here: an entry whose directory cannot be checked is dropped
/// on the next rewrite, never escalated.
#[derive(Error, Debug)]
pub enum RcdError {
    /// The history file could not be opened or created.
    #[error("cannot open history file {}: {}", path.display(), source)]
    Open {
        /// Path to the history file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Rewriting the history file failed partway.
    ///
    /// The file may be left with trailing lines from its previous, longer
    /// content. The next successful `record` re-filters and repairs it.
    #[error("cannot rewrite history file {}: {}", path.display(), source)]
    Write {
        /// Path to the history file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration file exists but could not be read or parsed.
    #[error("configuration error at {}: {}", path.display(), reason)]
    Config {
        /// Path to the config file
        path: PathBuf,
        /// Description of what's invalid
        reason: String,
    },

    /// I/O error during other file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for rcd_core operations.
pub type Result<T> = std::result::Result<T, RcdError>;
