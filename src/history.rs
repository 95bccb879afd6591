use std::collections::VecDeque;

use crate::config::DEFAULT_HISTORY_SIZE;

/// Bounded FIFO of operation descriptions. The oldest entry is evicted first.
#[derive(Clone, Debug)]
pub struct HistoryLog {
    entries: VecDeque<String>,
    max_size: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_SIZE)
    }
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    pub fn append(&mut self, message: impl Into<String>) {
        if self.max_size == 0 {
            return;
        }
        if self.entries.len() >= self.max_size {
            self.entries.pop_front();
        }
        self.entries.push_back(message.into());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries from oldest to newest.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}
