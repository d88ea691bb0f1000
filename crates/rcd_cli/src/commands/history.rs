//! Print the directory history, most recent first.

use anyhow::{Context, Result};
use rcd_core::{Config, HistoryStore};

pub fn run() -> Result<()> {
    let home = dirs::home_dir().context("could not determine home directory")?;

    let config = Config::load(&rcd_core::config_file(&home))?;
    let store = HistoryStore::new(rcd_core::history_file(&home), config.history);

    for entry in store.recent()? {
        println!("{entry}");
    }

    Ok(())
}
