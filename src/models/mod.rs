//! Data models for directory history scanning.
//!
//! - [`LogRecord`] - One timestamped command reconstructed from a history file
//! - [`ParsedLine`] - Per-line view handed out while a record is being built
//! - [`SearchConfig`] - Search parameters for a whole run
//! - [`FileScanResult`] - Output lines collected from one file

pub mod config;
pub mod record;
pub mod search;

pub use config::{DEFAULT_DURATION, SearchConfig};
pub use record::{LogRecord, ParsedLine};
pub use search::{FileScanResult, ScanSummary};
