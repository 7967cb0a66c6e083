//! Bounded radio log.

use std::collections::VecDeque;

use interdictor_core::constants::{RADIO_LOG_CAPACITY, RADIO_OPENING_LINE};

/// The most recent radio lines, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioLog {
    lines: VecDeque<String>,
}

impl Default for RadioLog {
    fn default() -> Self {
        let mut lines = VecDeque::with_capacity(RADIO_LOG_CAPACITY);
        lines.push_back(RADIO_OPENING_LINE.to_string());
        Self { lines }
    }
}

impl RadioLog {
    /// Append a line, dropping the oldest past capacity.
    pub fn push(&mut self, line: String) {
        self.lines.push_back(line);
        while self.lines.len() > RADIO_LOG_CAPACITY {
            self.lines.pop_front();
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
