//! Input history with a recall cursor
//!
//! Entries are stored oldest-first. The cursor ranges over `0..=len`;
//! `len` is the "fresh line" position and recalls as an empty string.

use std::collections::VecDeque;

use serde::Serialize;

use crate::config::DEFAULT_HISTORY_LIMIT;

/// Submitted command lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    entries: VecDeque<String>,
    cursor: usize,
    limit: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            limit: limit.max(1),
        }
    }

    /// Append a line and park the cursor past the end
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_back(line.into());
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len();
    }

    /// Step back toward the oldest entry. Stays put at the oldest.
    pub fn previous(&mut self) -> &str {
        if self.entries.is_empty() {
            return "";
        }
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        &self.entries[self.cursor]
    }

    /// Step forward. Past the newest entry this yields `""` until the next push.
    pub fn next(&mut self) -> &str {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            &self.entries[self.cursor]
        } else {
            self.cursor = self.entries.len();
            ""
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
