//! Record the current directory, then print one navigation directive.

use anyhow::{Context, Result};
use rcd_core::{directive, Config, HistoryStore};
use std::env;
use tracing::warn;

/// Run the cd command: record first, then decide what to print.
pub fn run(fuzzy: bool, repo: bool, history: bool, target: Option<&str>) -> Result<()> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    let current_dir = env::current_dir().context("could not determine current directory")?;

    let config = Config::load(&rcd_core::config_file(&home))?;
    let store = HistoryStore::new(rcd_core::history_file(&home), config.history);

    let recorded = store.record(&current_dir.to_string_lossy());

    let directive = if history {
        // The history picker replays the very file record just maintained;
        // on failure the content may be stale or degraded, so print nothing
        // rather than let the shell evaluate a directive built from it.
        recorded?;
        directive::history(store.path())
    } else {
        // Navigation itself must not be blocked by a bookkeeping failure.
        if let Err(err) = recorded {
            warn!("failed to record current directory: {err}");
        }
        if fuzzy {
            directive::fuzzy(target.unwrap_or("."))
        } else if repo {
            directive::repo()
        } else {
            let home = home.to_string_lossy();
            directive::plain(target.unwrap_or(home.as_ref()))
        }
    };

    print!("{directive}");
    Ok(())
}
