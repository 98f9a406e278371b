use std::path::{Path, PathBuf};

use anyhow::Context;

/// Directory `yieldboard.log` is written to: `<data-local>/yieldboard/logs`.
pub fn log_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir().context("system data-local directory is unavailable")?;
    Ok(log_dir_under(&base))
}

pub fn log_dir_under(data_local: &Path) -> PathBuf {
    data_local.join("yieldboard").join("logs")
}
