use std::collections::HashSet;

use sha2::{Digest, Sha256};

/// SHA-256 of a line's plain command text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn of(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        Self(hasher.finalize().into())
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Remembers which command lines a file has already produced
///
/// Keyed on content only: the same text under two different timestamps is still a
/// duplicate. Multi-line commands are deduplicated line by line, not as a whole record.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<Fingerprint>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `text` as seen. Returns true only the first time it is offered.
    pub fn first_occurrence(&mut self, text: &str) -> bool {
        self.seen.insert(Fingerprint::of(text))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
