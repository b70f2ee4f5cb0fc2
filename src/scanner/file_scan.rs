use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::error::{Result, ScanError};
use crate::models::{FileScanResult, SearchConfig};
use crate::parsers::{DateWindow, RecordReconstructor};
use crate::scanner::context::ContextWindow;
use crate::scanner::dedup::Deduplicator;

/// Runs a [`SearchConfig`] over history files, one file at a time
///
/// Every file gets a fresh record reconstructor, dedup set and context window, so
/// nothing leaks between files.
#[derive(Debug, Clone)]
pub struct HistoryScanner<Tz: TimeZone> {
    config: SearchConfig,
    tz: Tz,
}

impl HistoryScanner<Local> {
    /// Scanner that renders dates in the system time zone
    pub fn local(config: SearchConfig) -> Self {
        Self::new(config, Local)
    }
}

impl<Tz: TimeZone> HistoryScanner<Tz> {
    pub fn new(config: SearchConfig, tz: Tz) -> Self {
        Self { config, tz }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Date window relative to `now`
    pub fn window_at(&self, now: &DateTime<Tz>) -> DateWindow<Tz> {
        DateWindow::resolve(&self.config.from, &self.config.window, now)
    }

    /// Scan the file at `path` with a window computed from the current time
    ///
    /// # Errors
    ///
    /// - [`ScanError::Open`] if the file cannot be opened
    /// - [`ScanError::MalformedTimestamp`] if a marker line has an unreadable timestamp
    pub fn scan_file(&self, path: &Path) -> Result<FileScanResult> {
        let now = Utc::now().with_timezone(&self.tz);
        let window = self.window_at(&now);
        self.scan_file_in(path, &window)
    }

    /// Scan the file at `path` against an explicit window
    pub fn scan_file_in(&self, path: &Path, window: &DateWindow<Tz>) -> Result<FileScanResult> {
        let file = File::open(path)
            .map_err(|source| ScanError::Open { path: path.to_path_buf(), source })?;
        let lines = self.scan_reader(BufReader::new(file), window)?;
        Ok(FileScanResult { path: path.to_path_buf(), lines })
    }

    /// Scan history text from any reader and return the output lines in order
    ///
    /// A read error part way through stops the scan quietly and keeps what was
    /// collected so far.
    pub fn scan_reader<R: BufRead>(
        &self,
        mut reader: R,
        window: &DateWindow<Tz>,
    ) -> Result<Vec<String>> {
        let mut reconstructor = RecordReconstructor::new(self.tz.clone());
        let mut dedup = Deduplicator::new();
        let mut context =
            (self.config.context > 0).then(|| ContextWindow::new(self.config.context));
        let mut multiline_emitted: Option<usize> = None;
        let mut out = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(
                        "Stopped reading after line {}: {}",
                        reconstructor.line_number(),
                        e
                    );
                    break;
                }
            }
            let line = decode_line(&buf);

            let parsed = reconstructor.feed(&line)?;
            let Some(record) = parsed.record else {
                continue;
            };
            if !window.contains(&record.timestamp) {
                continue;
            }
            if !dedup.first_occurrence(&parsed.plain) {
                continue;
            }

            let hit = self.config.expression.matches(&line);
            match context.as_mut() {
                Some(context) if hit => context.push_match(&parsed.display),
                Some(context) => context.push_other(&parsed.display, &mut out),
                None if !hit => {}
                None => {
                    if self.config.multiline && multiline_emitted != Some(record.ordinal) {
                        out.extend(record.display_lines.iter().cloned());
                        multiline_emitted = Some(record.ordinal);
                    } else {
                        out.push(parsed.display);
                    }
                }
            }
        }

        if let Some(context) = context.as_mut() {
            context.finish(&mut out);
        }

        tracing::debug!(
            "Read {} lines, {} distinct commands in window, {} output lines",
            reconstructor.line_number(),
            dedup.len(),
            out.len()
        );

        Ok(out)
    }
}

/// Strip the line terminator (`\n` or `\r\n`) and decode, replacing invalid UTF-8
fn decode_line(buf: &[u8]) -> String {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}
