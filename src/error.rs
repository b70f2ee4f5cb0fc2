use std::path::PathBuf;

use thiserror::Error;

/// Failures that end the scan of a single history file.
///
/// None of these cross file boundaries: the caller logs them and moves on to the
/// next candidate file.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to open history file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed timestamp on line {line}: {text:?}")]
    MalformedTimestamp { line: usize, text: String },
}

pub type Result<T> = std::result::Result<T, ScanError>;
