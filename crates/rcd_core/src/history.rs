//! The directory-history store.
//!
//! One plain-text file, one absolute path per line, most recent last. Every
//! `record` call is a one-shot read-filter-write: the tool runs as a new
//! process on each directory change, so there is nothing to cache in memory
//! between calls.
//!
//! Concurrent invocations from separate shells race the read-filter-write
//! sequence; the last full rewrite wins and the loser's entry may be lost.
//! No lock file is used: the worst outcome is a missing history line, and
//! the next rewrite re-filters the file from scratch.

use crate::config::HistoryConfig;
use crate::error::{RcdError, Result};
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Owns the on-disk history file.
///
/// After a successful [`record`](HistoryStore::record) the file holds no
/// duplicates, no blank lines, no paths that stopped being directories, and
/// the recorded directory as its last line.
pub struct HistoryStore {
    path: PathBuf,
    config: HistoryConfig,
}

impl HistoryStore {
    /// Creates a store for the history file at `path`.
    ///
    /// The file itself is created lazily by the first `record` call.
    pub fn new(path: impl Into<PathBuf>, config: HistoryConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    /// Returns the path of the underlying history file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records `current_dir` as the most recently visited directory.
    ///
    /// Existing lines are kept once each in first-seen order, minus blanks,
    /// minus any line equal to `current_dir`, minus paths that no longer
    /// exist as directories. `current_dir` goes last, unconditionally: the
    /// caller is necessarily running inside it, so it is trusted without a
    /// stat. The filtered content is written back over the same file and the
    /// file is truncated to exactly the bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`RcdError::Open`] if the file cannot be opened or created,
    /// [`RcdError::Write`] if the rewrite fails partway. After a failed
    /// rewrite the file may still carry trailing lines from its previous
    /// content; the next successful `record` repairs that.
    pub fn record(&self, current_dir: &str) -> Result<()> {
        if current_dir.is_empty() {
            return Err(RcdError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "refusing to record an empty directory path",
            )));
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| RcdError::Open {
                path: self.path.clone(),
                source: e,
            })?;

        let mut content = String::new();
        file.read_to_string(&mut content)?;

        let mut kept = surviving_lines(&content, current_dir);

        // Leave room for the appended entry when a size cap is configured.
        if let Some(max) = self.config.max_entries {
            let room = max.saturating_sub(1);
            if kept.len() > room {
                kept.drain(..kept.len() - room);
            }
        }

        let mut out = String::with_capacity(content.len() + current_dir.len() + 1);
        for line in &kept {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(current_dir);
        out.push('\n');

        let write_err = |e| RcdError::Write {
            path: self.path.clone(),
            source: e,
        };
        file.seek(SeekFrom::Start(0)).map_err(write_err)?;
        file.write_all(out.as_bytes()).map_err(write_err)?;
        file.set_len(out.len() as u64).map_err(write_err)?;

        debug!(
            path = %self.path.display(),
            kept = kept.len(),
            "recorded current directory"
        );

        Ok(())
    }

    /// Returns all entries in on-disk order, most recent last.
    ///
    /// A missing file reads as empty. Blank lines (possible after a partial
    /// rewrite) are skipped.
    pub fn entries(&self) -> Result<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(RcdError::Open {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_owned)
            .collect())
    }

    /// Returns the entries most-recent-first.
    ///
    /// Each call re-reads the file, so the sequence is restartable and
    /// reflects whatever is on disk at call time.
    pub fn recent(&self) -> Result<impl Iterator<Item = String>> {
        Ok(self.entries()?.into_iter().rev())
    }
}

/// Filters the previous file content down to the lines worth keeping.
///
/// Keeps each line once, first-seen order. Drops blanks, lines equal to
/// `current_dir` (re-appended by the caller), duplicates, and paths that are
/// not directories anymore. A stat failure counts as "not a directory": one
/// unreadable entry must not block maintenance of the rest.
fn surviving_lines<'a>(content: &'a str, current_dir: &str) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() || line == current_dir {
            continue;
        }
        if !seen.insert(line) {
            continue;
        }
        if !Path::new(line).is_dir() {
            debug!(path = line, "dropping vanished history entry");
            continue;
        }
        kept.push(line);
    }

    kept
}
