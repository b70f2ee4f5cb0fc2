//! Reconstruct timestamped records from zsh extended-history style files.
//!
//! ```text
//! : 1700000000:0;git status
//! : 1700003600:0;for f in *.log; do \
//! gzip "$f"; done
//! ```
//!
//! A line whose first character is [`MARKER`] opens a new record; the second
//! `:`-separated field is its Unix timestamp and anything after the first
//! [`COMMAND_SEPARATOR`] is the command. Lines without a marker are continuation lines
//! and keep the date of the record they follow.

use chrono::TimeZone;

use crate::error::{Result, ScanError};
use crate::models::{LogRecord, ParsedLine};

pub const MARKER: char = ':';
pub const COMMAND_SEPARATOR: char = ';';

pub fn is_marker_line(line: &str) -> bool {
    line.starts_with(MARKER)
}

/// Timestamp field of a marker line, e.g. `1700000000` from `: 1700000000:0;ls`
pub fn parse_marker_timestamp(line: &str) -> Option<i64> {
    line.split(MARKER).nth(1)?.trim().parse().ok()
}

/// Command text of a line. Only marker lines carry a prefix to strip.
pub fn command_text(line: &str, marker: bool) -> &str {
    match line.find(COMMAND_SEPARATOR) {
        Some(index) if marker && index > 0 => &line[index + COMMAND_SEPARATOR.len_utf8()..],
        _ => line,
    }
}

/// Line-at-a-time state machine turning raw history lines into [`LogRecord`]s
#[derive(Debug)]
pub struct RecordReconstructor<Tz: TimeZone> {
    tz: Tz,
    line_number: usize,
    records_opened: usize,
    current: Option<LogRecord<Tz>>,
}

impl<Tz: TimeZone> RecordReconstructor<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz, line_number: 0, records_opened: 0, current: None }
    }

    /// The record currently being built, if a marker has been seen
    pub fn current(&self) -> Option<&LogRecord<Tz>> {
        self.current.as_ref()
    }

    /// 1-based number of the last line fed
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Consume one physical line.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::MalformedTimestamp`] when a marker line has no parseable
    /// timestamp field.
    pub fn feed(&mut self, line: &str) -> Result<ParsedLine<'_, Tz>> {
        self.line_number += 1;

        let marker = is_marker_line(line);
        if marker {
            let timestamp = parse_marker_timestamp(line)
                .and_then(|secs| self.tz.timestamp_opt(secs, 0).single())
                .ok_or_else(|| ScanError::MalformedTimestamp {
                    line: self.line_number,
                    text: line.to_string(),
                })?;
            self.current = Some(LogRecord::open(self.records_opened, timestamp));
            self.records_opened += 1;
        }

        let plain = command_text(line, marker);

        let record = match self.current.as_mut() {
            Some(record) => {
                let display = format!("{}: {}", record.date, plain);
                record.push(line, &display, plain);
                ParsedLine { display, plain: plain.to_string(), record: Some(&*record) }
            }
            None => {
                ParsedLine { display: format!(": {}", plain), plain: plain.to_string(), record: None }
            }
        };

        Ok(record)
    }
}
