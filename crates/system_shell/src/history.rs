//! Recency-ordered command recall with an up/down cursor.

use std::collections::VecDeque;

use system_shell_contract::HistoryDirection;

/// Maximum number of raw input lines retained for recall.
pub const MAX_COMMAND_HISTORY: usize = 50;

/// Most-recent-first list of submitted input lines plus the recall cursor.
///
/// The cursor is `None` while the user edits a fresh line and `Some(index)` while recalling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    /// Records a submitted line and resets the cursor.
    ///
    /// A line equal to the current most recent entry is not recorded twice.
    pub fn push(&mut self, raw: &str) {
        if self.entries.front().map(String::as_str) != Some(raw) {
            self.entries.push_front(raw.to_string());
            self.entries.truncate(MAX_COMMAND_HISTORY);
        }
        self.cursor = None;
    }

    /// Moves the cursor and returns the recalled line, or `""` when back on a fresh line.
    ///
    /// `Up` saturates at the oldest entry; `Down` saturates at the fresh line.
    pub fn navigate(&mut self, direction: HistoryDirection) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let last = self.entries.len() - 1;
        self.cursor = match (direction, self.cursor) {
            (HistoryDirection::Up, None) => Some(0),
            (HistoryDirection::Up, Some(index)) => Some((index + 1).min(last)),
            (HistoryDirection::Down, None | Some(0)) => None,
            (HistoryDirection::Down, Some(index)) => Some(index - 1),
        };

        self.cursor
            .and_then(|index| self.entries.get(index))
            .cloned()
            .unwrap_or_default()
    }

    /// Current recall position.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Leaves recall mode without changing entries.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
