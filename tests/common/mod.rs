//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use tempfile::TempDir;

/// Builder for test `.directory_history` trees
pub struct HistoryDirBuilder {
    temp_dir: TempDir,
}

impl HistoryDirBuilder {
    /// Create a new builder with an empty history base directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the history base directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw content to `relative` (e.g. `home/u/src/history`), creating parents
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create history subdirectory");
        }
        fs::write(&path, content).expect("Failed to write history file");
        self
    }

    /// Write a history file built from `file`
    pub fn with_history(self, relative: &str, file: &HistoryFileBuilder) -> Self {
        let content = file.build();
        self.with_file(relative, &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for HistoryDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for zsh extended-history content
pub struct HistoryFileBuilder {
    lines: Vec<String>,
}

impl HistoryFileBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a single-line command at a Unix timestamp
    pub fn command_at(mut self, timestamp: i64, command: &str) -> Self {
        self.lines.push(format!(": {}:0;{}", timestamp, command));
        self
    }

    /// Add a single-line command `days` days ago
    pub fn command_days_ago(self, days: i64, command: &str) -> Self {
        self.command_at(days_ago(days), command)
    }

    /// Add a command whose later lines are continuation lines
    pub fn multiline_at(mut self, timestamp: i64, lines: &[&str]) -> Self {
        if let Some((first, rest)) = lines.split_first() {
            self.lines.push(format!(": {}:0;{}", timestamp, first));
            self.lines.extend(rest.iter().map(|l| l.to_string()));
        }
        self
    }

    /// Add a raw line as-is
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }
}

impl Default for HistoryFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Unix timestamp `days` days before now
pub fn days_ago(days: i64) -> i64 {
    (Utc::now() - Duration::days(days)).timestamp()
}

/// Local `YYYY-MM-DD` for a Unix timestamp, as printed by the scanner
pub fn local_date(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .expect("timestamp in range")
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d")
        .to_string()
}

/// Path of `relative` inside `root`
pub fn file_in(root: &Path, relative: &str) -> PathBuf {
    root.join(relative)
}
