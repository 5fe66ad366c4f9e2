//! Transport-agnostic command output.
//!
//! A [`Response`] is what a caller gets back for one submitted line: the
//! output lines and the prompt computed after the command ran. The TUI,
//! batch runner and line server each render it their own way.

use serde::Serialize;

/// Result of submitting one line to the simulator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Output lines, without the echoed command.
    pub output: Vec<String>,
    /// Prompt reflecting the post-command mode and hostname.
    pub prompt: String,
}

impl Response {
    pub fn new(output: Vec<String>, prompt: impl Into<String>) -> Self {
        Self {
            output,
            prompt: prompt.into(),
        }
    }

    /// A response with no output lines.
    pub fn silent(prompt: impl Into<String>) -> Self {
        Self::new(Vec::new(), prompt)
    }

    /// Returns true if the command produced no output.
    pub fn is_silent(&self) -> bool {
        self.output.is_empty()
    }

    /// Renders the response as one JSON object on a single line.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
