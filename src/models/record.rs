use chrono::{DateTime, TimeZone};

/// One logical command from a history file, opened by a timestamp marker line
///
/// Every physical line up to the next marker is appended here, which is how
/// multi-line commands end up under a single date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord<Tz: TimeZone> {
    /// Position of this record within its file, starting at 0
    pub ordinal: usize,
    pub timestamp: DateTime<Tz>,
    /// `YYYY-MM-DD` in the scan's time zone
    pub date: String,
    pub lines: Vec<String>,
    pub display_lines: Vec<String>,
    pub plain_command: Vec<String>,
}

impl<Tz: TimeZone> LogRecord<Tz> {
    pub fn open(ordinal: usize, timestamp: DateTime<Tz>) -> Self {
        let date = timestamp.date_naive().format("%Y-%m-%d").to_string();
        Self {
            ordinal,
            timestamp,
            date,
            lines: Vec::new(),
            display_lines: Vec::new(),
            plain_command: Vec::new(),
        }
    }

    pub fn push(&mut self, raw: &str, display: &str, plain: &str) {
        self.lines.push(raw.to_string());
        self.display_lines.push(display.to_string());
        self.plain_command.push(plain.to_string());
    }
}

/// What the reconstructor reports for each physical line it consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'r, Tz: TimeZone> {
    /// `"{date}: {command text}"`
    pub display: String,
    /// Command text with the marker prefix removed
    pub plain: String,
    /// The record this line belongs to, `None` before the first marker
    pub record: Option<&'r LogRecord<Tz>>,
}

impl<Tz: TimeZone> ParsedLine<'_, Tz> {
    pub fn timestamp(&self) -> Option<&DateTime<Tz>> {
        self.record.map(|record| &record.timestamp)
    }
}
