//! Print the shell integration snippet.

use anyhow::Result;

pub fn run() -> Result<()> {
    println!("{}", rcd_core::init_snippet());
    Ok(())
}
