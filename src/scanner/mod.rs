//! Match-and-context scanning of directory history files
//!
//! Per file, lines flow through:
//!
//! 1. [`RecordReconstructor`](crate::parsers::RecordReconstructor) - dates each line
//! 2. [`DateWindow`](crate::parsers::DateWindow) - drops lines outside the window
//! 3. [`Deduplicator`] - drops command text already seen in this file
//! 4. [`SearchExpr`](crate::filters::SearchExpr) - decides whether the line matches
//! 5. [`ContextWindow`] or direct emission - builds the output lines
//!
//! Known quirk: deduplication works on single physical lines while multiline output
//! works on whole records, so a repeated continuation line is dropped even when the
//! record it belongs to is new.

pub mod context;
pub mod dedup;
pub mod discovery;
pub mod file_scan;
pub mod runner;

pub use context::{ContextTag, ContextWindow, TaggedLine};
pub use dedup::{Deduplicator, Fingerprint};
pub use discovery::{HISTORY_SUFFIX, discover_history_files, is_history_file};
pub use file_scan::HistoryScanner;
pub use runner::scan_history_tree;
