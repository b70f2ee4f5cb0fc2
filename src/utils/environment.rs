use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Overrides the history base directory when set and non-empty
pub const HISTORY_BASE_VAR: &str = "HISTORY_BASE";

/// Directory under `$HOME` used when [`HISTORY_BASE_VAR`] is unset
pub const DEFAULT_HISTORY_DIR: &str = ".directory_history";

/// Get the directory history base (`$HISTORY_BASE` or `~/.directory_history`)
pub fn get_history_base_dir() -> Result<PathBuf> {
    if let Some(base) = env::var_os(HISTORY_BASE_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(base));
    }
    let home = dirs::home_dir().context("Error fetching the user's home directory")?;
    Ok(home.join(DEFAULT_HISTORY_DIR))
}
