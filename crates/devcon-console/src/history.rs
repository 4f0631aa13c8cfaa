//! Executed-command history with previous/next recall.

use crate::buffer::BoundedLog;

/// Result of moving the recall cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// The cursor landed on this entry.
    Entry(&'a str),
    /// The cursor moved past the newest entry; the input line should clear.
    Cleared,
    /// History is empty, nothing happened.
    Unchanged,
}

/// Bounded command history plus a recall cursor.
///
/// The cursor lives in `[0, len]`. `len` means "not recalling".
#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: BoundedLog<String>,
    cursor: usize,
}

impl CommandHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BoundedLog::new(capacity),
            cursor: 0,
        }
    }

    /// Record an executed line and reset the cursor to "not recalling".
    pub fn push(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.cursor = self.entries.len();
    }

    /// Step towards older entries, stopping at the oldest.
    pub fn step_back(&mut self) -> Recall<'_> {
        if self.entries.is_empty() {
            return Recall::Unchanged;
        }
        self.cursor = self.cursor.saturating_sub(1).min(self.entries.len() - 1);
        self.current()
    }

    /// Step towards newer entries; stepping past the newest clears the line.
    pub fn step_forward(&mut self) -> Recall<'_> {
        if self.entries.is_empty() {
            return Recall::Unchanged;
        }
        self.cursor = (self.cursor + 1).min(self.entries.len());
        self.current()
    }

    fn current(&self) -> Recall<'_> {
        match self.entries.get(self.cursor) {
            Some(entry) => Recall::Entry(entry),
            None => Recall::Cleared,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.entries.set_capacity(capacity);
        self.cursor = self.cursor.min(self.entries.len());
    }

    /// Entries oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.snapshot()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
