//! Scan a whole history tree.
//!
//! # Error Handling Strategy
//!
//! Failures are isolated per file:
//!
//! - **Open failures and malformed timestamps** end the scan of that file only. They are
//!   logged as warnings, counted in [`ScanSummary::files_failed`] and the walk continues.
//! - **Read errors part way through a file** are absorbed by the scanner, which keeps the
//!   lines collected before the error.
//! - **A missing search root** is the only error returned to the caller.
//!
//! Results are handed to the caller file by file, in traversal order, so output can be
//! printed as soon as each file is done.

use std::path::Path;

use anyhow::Result;
use chrono::TimeZone;

use crate::models::{FileScanResult, ScanSummary};
use crate::scanner::discovery::discover_history_files;
use crate::scanner::file_scan::HistoryScanner;

/// Scan every history file under `root`, calling `on_file` for each one scanned
///
/// `on_file` also sees files with no output; check [`FileScanResult::has_output`].
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use search_directory_history::models::SearchConfig;
/// use search_directory_history::scanner::{HistoryScanner, scan_history_tree};
///
/// let scanner = HistoryScanner::local(SearchConfig::new("kubectl & namespace"));
/// let summary = scan_history_tree(Path::new("/home/alice/.directory_history"), &scanner, |result| {
///     for line in &result.lines {
///         println!("{}", line);
///     }
/// })?;
/// println!("{} files scanned", summary.files_scanned);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn scan_history_tree<Tz, F>(
    root: &Path,
    scanner: &HistoryScanner<Tz>,
    mut on_file: F,
) -> Result<ScanSummary>
where
    Tz: TimeZone,
    F: FnMut(&FileScanResult),
{
    let mut summary = ScanSummary::default();

    for path in discover_history_files(root)? {
        match scanner.scan_file(&path) {
            Ok(result) => {
                summary.record(&result);
                on_file(&result);
            }
            Err(e) => {
                summary.record_failure();
                tracing::warn!("Skipping history file {}: {}", path.display(), e);
            }
        }
    }

    tracing::debug!(
        "Scanned {} history files ({} with matches, {} failed, {} lines)",
        summary.files_scanned,
        summary.files_with_output,
        summary.files_failed,
        summary.lines_emitted
    );

    Ok(summary)
}
