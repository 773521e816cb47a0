//! Navigation port: the slice of a browser history API the state store needs.
//!
//! Pop events (back/forward) flow the other way: whoever drives the history hands
//! the entry it landed on to `StateStore::apply_pop_event`.

use serde::Serialize;

use crate::store::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub page: Page,
    pub path: &'static str,
}

impl HistoryEntry {
    pub fn for_page(page: Page) -> Self {
        Self {
            page,
            path: page.path(),
        }
    }
}

pub trait NavigationPort {
    /// Path currently shown in the location bar.
    fn current_path(&self) -> String;
    fn push(&mut self, entry: HistoryEntry);
    /// Overwrite the current entry without growing the stack.
    fn replace(&mut self, entry: HistoryEntry);
    /// Drop all entries and start over from `entry`.
    fn reset(&mut self, entry: HistoryEntry);
}

/// In-process history stack with a cursor, behaving like a browser tab.
#[derive(Debug, Clone)]
pub struct SessionHistory {
    location: String,
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl SessionHistory {
    /// A tab opened at `initial_path`. The path may be one no page claims.
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            location: initial_path.into(),
            entries: Vec::new(),
            cursor: 0,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Move one entry back; returns the entry to deliver as a pop event.
    pub fn back(&mut self) -> Option<HistoryEntry> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        self.land()
    }

    pub fn forward(&mut self) -> Option<HistoryEntry> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        self.land()
    }

    fn land(&mut self) -> Option<HistoryEntry> {
        let entry = *self.entries.get(self.cursor)?;
        self.location = entry.path.to_string();
        Some(entry)
    }
}

impl NavigationPort for SessionHistory {
    fn current_path(&self) -> String {
        self.location.clone()
    }

    fn push(&mut self, entry: HistoryEntry) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
        self.location = entry.path.to_string();
    }

    fn replace(&mut self, entry: HistoryEntry) {
        match self.entries.get_mut(self.cursor) {
            Some(slot) => *slot = entry,
            None => {
                self.entries.push(entry);
                self.cursor = self.entries.len() - 1;
            }
        }
        self.location = entry.path.to_string();
    }

    fn reset(&mut self, entry: HistoryEntry) {
        self.entries.clear();
        self.entries.push(entry);
        self.cursor = 0;
        self.location = entry.path.to_string();
    }
}
