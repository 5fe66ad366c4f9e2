//! Terminal transcript.
//!
//! The last line is always the live prompt. Recording a command turns that
//! prompt into the echoed command line, appends the output, then a fresh
//! prompt.

use crate::commands::Response;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
    limit: Option<usize>,
}

impl Transcript {
    /// Starts a transcript showing only `prompt`.
    pub fn new(prompt: impl Into<String>, limit: Option<usize>) -> Self {
        Self {
            lines: vec![prompt.into()],
            limit,
        }
    }

    /// Records one submitted line and its response.
    pub fn record(&mut self, input: &str, response: &Response) {
        let input = input.trim();
        if !input.is_empty() {
            if let Some(prompt) = self.lines.last_mut() {
                prompt.push(' ');
                prompt.push_str(input);
            }
        }
        self.lines.extend(response.output.iter().cloned());
        self.lines.push(response.prompt.clone());
        self.enforce_limit();
    }

    /// Drops everything but the live prompt.
    pub fn clear(&mut self) {
        let prompt = self.lines.pop().unwrap_or_default();
        self.lines = vec![prompt];
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The live prompt.
    pub fn prompt(&self) -> &str {
        self.lines.last().map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the transcript as newline-separated text.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            let limit = limit.max(1);
            if self.lines.len() > limit {
                let excess = self.lines.len() - limit;
                self.lines.drain(..excess);
            }
        }
    }
}
