//! Search Directory History - Search per-directory shell history files
//!
//! Shell hooks that keep one history file per working directory leave a tree of
//! zsh extended-history files under `~/.directory_history/`. This library searches that
//! tree. It supports:
//!
//! - Reconstructing timestamped (and multi-line) commands from history files
//! - Limiting results to a relative date window (`--searchfrom 6m --searchduration 1m`)
//! - `a & b | c` style search expressions
//! - Dropping repeated commands within a file
//! - Context lines around each match
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use search_directory_history::{HistoryScanner, SearchConfig};
//!
//! let scanner = HistoryScanner::local(SearchConfig::new("kubectl").with_context(2));
//! let result = scanner.scan_file(Path::new("/Users/alice/.directory_history/zsh_history"))?;
//! for line in &result.lines {
//!     println!("{}", line);
//! }
//! # Ok::<(), search_directory_history::ScanError>(())
//! ```

pub mod cli;
pub mod error;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod scanner;
pub mod utils;

// Re-export commonly used types
pub use error::ScanError;
pub use filters::SearchExpr;
pub use models::{FileScanResult, LogRecord, SearchConfig};
pub use parsers::{DateWindow, Direction, resolve_duration};
pub use scanner::{HistoryScanner, scan_history_tree};
pub use utils::add_leading_slash;
