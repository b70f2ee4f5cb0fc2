//! Sliding "match ± N lines" window.
//!
//! Lines are buffered with a one-character tag:
//!
//! - `+` leading context seen before a match
//! - `=` a matching line
//! - `-` trailing context after a match
//!
//! A match does not flush on its own. The buffer is written out once `context` trailing
//! lines have been collected and one more non-matching line arrives, or at end of file.
//!
//! Two behaviors worth knowing:
//!
//! - Leading context is capped by dropping the **two** oldest entries whenever the
//!   buffer grows past `context`, so between `context - 1` and `context` leading lines
//!   survive.
//! - Flushing does not empty the buffer. Flushed entries age out through the same
//!   two-at-a-time eviction, and can be written again if another match follows closely.

use std::collections::VecDeque;
use std::fmt;

const EVICT_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextTag {
    Leading,
    Matched,
    Trailing,
}

impl ContextTag {
    pub fn symbol(self) -> char {
        match self {
            ContextTag::Leading => '+',
            ContextTag::Matched => '=',
            ContextTag::Trailing => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLine {
    pub tag: ContextTag,
    pub text: String,
}

impl fmt::Display for TaggedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag.symbol(), self.text)
    }
}

#[derive(Debug)]
pub struct ContextWindow {
    context: usize,
    inside_match: bool,
    trailing_count: usize,
    buffer: VecDeque<TaggedLine>,
}

impl ContextWindow {
    pub fn new(context: usize) -> Self {
        Self { context, inside_match: false, trailing_count: 0, buffer: VecDeque::new() }
    }

    pub fn inside_match(&self) -> bool {
        self.inside_match
    }

    pub fn buffered(&self) -> impl Iterator<Item = &TaggedLine> {
        self.buffer.iter()
    }

    /// Record a matching line
    pub fn push_match(&mut self, line: &str) {
        self.inside_match = true;
        self.trailing_count = 0;
        self.push(ContextTag::Matched, line);
    }

    /// Record a non-matching line, writing the buffer to `out` when the trailing
    /// context is complete
    pub fn push_other(&mut self, line: &str, out: &mut Vec<String>) {
        if self.inside_match {
            if self.trailing_count >= self.context {
                self.flush(out);
                self.inside_match = false;
                self.trailing_count = 0;
            } else {
                self.push(ContextTag::Trailing, line);
                self.trailing_count += 1;
            }
        } else {
            self.push(ContextTag::Leading, line);
            if self.buffer.len() > self.context {
                let evict = EVICT_COUNT.min(self.buffer.len());
                self.buffer.drain(..evict);
            }
        }
    }

    /// End of input: write out a match still waiting for trailing context
    pub fn finish(&mut self, out: &mut Vec<String>) {
        if self.inside_match && !self.buffer.is_empty() {
            self.flush(out);
        }
        self.inside_match = false;
        self.trailing_count = 0;
    }

    fn push(&mut self, tag: ContextTag, line: &str) {
        self.buffer.push_back(TaggedLine { tag, text: line.to_string() });
    }

    fn flush(&self, out: &mut Vec<String>) {
        out.extend(self.buffer.iter().map(TaggedLine::to_string));
    }
}
