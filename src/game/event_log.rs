//! Bounded log of recent gameplay messages, shown in the info panel.

use crate::constants::EVENT_LOG_CAPACITY;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLogEntry {
    pub message: String,
    /// Frame the entry was recorded on.
    pub frame: u64,
    /// Highlight in the panel (crashes).
    pub is_alert: bool,
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: VecDeque<EventLogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, message: String, frame: u64, is_alert: bool) {
        // Keep only the last EVENT_LOG_CAPACITY entries
        if self.entries.len() >= EVENT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(EventLogEntry {
            message,
            frame,
            is_alert,
        });
    }

    /// Oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &EventLogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
