//! Command recall for the input line.
//!
//! Up/Down walk through previously submitted commands. Whatever was typed
//! before the walk started is kept as a draft and restored at the bottom.

use std::collections::VecDeque;

pub const MAX_RECALL_SIZE: usize = 100;

#[derive(Debug, Default)]
pub struct CommandRecall {
    /// Oldest first.
    entries: VecDeque<String>,
    /// Index into `entries` while walking; `None` at the draft.
    position: Option<usize>,
    draft: String,
}

impl CommandRecall {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted command. Blank lines and repeats of the previous
    /// command are not recorded.
    pub fn push(&mut self, command: &str) {
        self.position = None;
        self.draft.clear();

        let command = command.trim();
        if command.is_empty() || self.entries.back().is_some_and(|last| last == command) {
            return;
        }

        if self.entries.len() == MAX_RECALL_SIZE {
            self.entries.pop_front();
        }
        self.entries.push_back(command.to_string());
    }

    /// Steps to an older command. Returns `None` when already at the oldest.
    pub fn older(&mut self, current_input: &str) -> Option<&str> {
        let next = match self.position {
            None if self.entries.is_empty() => return None,
            None => {
                self.draft = current_input.to_string();
                self.entries.len() - 1
            }
            Some(0) => return None,
            Some(pos) => pos - 1,
        };
        self.position = Some(next);
        self.entries.get(next).map(String::as_str)
    }

    /// Steps to a newer command, ending at the draft. Returns `None` when
    /// not walking.
    pub fn newer(&mut self) -> Option<&str> {
        let pos = self.position?;
        if pos + 1 < self.entries.len() {
            self.position = Some(pos + 1);
            self.entries.get(pos + 1).map(String::as_str)
        } else {
            self.position = None;
            Some(self.draft.as_str())
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
