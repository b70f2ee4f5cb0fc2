use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use walkdir::{DirEntry, WalkDir};

/// Files whose path ends with this are treated as history files
pub const HISTORY_SUFFIX: &str = "history";

/// True for paths like `.../zsh_history` or `.../project/history`
pub fn is_history_file(path: &Path) -> bool {
    path.to_string_lossy().ends_with(HISTORY_SUFFIX)
}

/// Regular files, or symlinks whose target is a regular file
fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        fs::metadata(entry.path()).map(|meta| meta.is_file()).unwrap_or(false)
    } else {
        entry.file_type().is_file()
    }
}

/// Find every history file under `root`, in file-name order
///
/// Walks the tree depth-first, sorting entries in each directory by name so output is
/// stable between runs. Symlinked files are returned when they point at a regular file;
/// symlinked directories are not descended into.
///
/// # Errors
///
/// Returns an error if `root` does not exist. Entries that cannot be read (permission
/// denied, removed mid-walk) are logged as warnings and skipped.
pub fn discover_history_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        bail!("Search path does not exist: {}", root.display());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !is_regular_file(&entry) {
            continue;
        }

        if is_history_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
