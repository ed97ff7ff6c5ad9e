//! Session tape of resolved computations
//!
//! The tape is a bounded, in-memory record the presentation layer appends
//! to whenever an equals press resolves a computation. The state machine
//! never reads it, and nothing is persisted between sessions.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single resolved computation, e.g. `7 + 3` with result `10`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The computation as shown on the readout, operands and operator.
    pub expression: String,
    /// The result display string (may be a non-finite spelling).
    pub result: String,
}

impl TapeEntry {
    /// Creates a new tape entry
    #[must_use]
    pub fn new(expression: String, result: String) -> Self {
        Self { expression, result }
    }

    /// Returns a formatted display string
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Bounded queue of resolved computations, oldest entries dropped first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    /// The recorded entries
    entries: VecDeque<TapeEntry>,
    /// Maximum number of entries to keep
    max_entries: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates an empty tape with the default bound
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates an empty tape with a custom bound
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Appends an entry, dropping the oldest when the bound is reached
    pub fn push(&mut self, entry: TapeEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a resolved computation
    pub fn record(&mut self, expression: &str, result: &str) {
        self.push(TapeEntry::new(expression.to_string(), result.to_string()));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tape is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Clears all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Returns an iterator over the entries (newest first)
    pub fn iter_rev(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Returns the entry at the given index (0 = oldest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TapeEntry> {
        self.entries.get(index)
    }

    /// Serializes the tape entries to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Deserializes tape entries from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<TapeEntry> = serde_json::from_str(json)?;
        let mut tape = Self::new();
        for entry in entries {
            tape.push(entry);
        }
        Ok(tape)
    }
}
