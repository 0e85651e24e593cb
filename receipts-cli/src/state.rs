use anyhow::{Context, Result};
use std::path::PathBuf;

/// `~/.receipts`, where the optional config file lives.
pub fn receipts_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".receipts"))
}
