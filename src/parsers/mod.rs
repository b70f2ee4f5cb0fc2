//! Parsers for directory history files and relative duration tokens
//!
//! # Error Handling Strategy
//!
//! The two parsers here fail in opposite ways, matching what a user of the CLI expects:
//!
//! - **Durations** never fail from the caller's point of view. A malformed `--searchfrom`
//!   or `--searchduration` token silently resolves to five years before its reference
//!   time (see [`duration::resolve_duration`]).
//!
//! - **History records** fail hard on a marker line with an unreadable timestamp. The
//!   error ([`crate::error::ScanError::MalformedTimestamp`]) aborts the current file only;
//!   the scanner logs it and continues with the next file.

pub mod duration;
pub mod record;

pub use duration::{DateWindow, Direction, DurationSpec, leading_int, resolve_duration};
pub use record::RecordReconstructor;
