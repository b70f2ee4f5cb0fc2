use std::path::PathBuf;

/// Output collected from a single history file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScanResult {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl FileScanResult {
    pub fn has_output(&self) -> bool {
        !self.lines.is_empty()
    }
}

/// Per-run counters, reported once all files are scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub files_with_output: usize,
    pub files_failed: usize,
    pub lines_emitted: usize,
}

impl ScanSummary {
    pub fn record(&mut self, result: &FileScanResult) {
        self.files_scanned += 1;
        if result.has_output() {
            self.files_with_output += 1;
            self.lines_emitted += result.lines.len();
        }
    }

    pub fn record_failure(&mut self) {
        self.files_failed += 1;
    }
}
