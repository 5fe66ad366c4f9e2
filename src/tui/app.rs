//! Application state for the TUI.
//!
//! Owns the simulator, the transcript and the input line, and turns key
//! events into edits, submissions and scrolling.

use super::history::CommandRecall;
use super::Event;
use crate::config::Config;
use crate::presenter::Transcript;
use crate::scenario::Scenario;
use crate::simulator::Simulator;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Lines moved per PageUp/PageDown.
const PAGE_SCROLL: usize = 10;

/// Input state for text editing.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current input text.
    pub text: String,
    /// Cursor position (character index).
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.text.remove(at);
        }
    }

    /// Deletes the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index();
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.move_end();
    }

    /// Clears the input and returns the previous text.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

/// Main application state.
pub struct App {
    /// Whether the application is still running.
    pub running: bool,
    pub input: InputState,
    pub recall: CommandRecall,
    pub simulator: Simulator,
    pub transcript: Transcript,
    /// Lab addressing shown in the side panel.
    pub scenario: Scenario,
    /// Transcript scroll offset (lines from bottom).
    pub scroll: usize,
}

impl App {
    /// Creates a new App with a fresh simulator.
    pub fn new(config: &Config) -> Self {
        let simulator = Simulator::from_config(config);
        let transcript = Transcript::new(simulator.prompt(), config.presenter.transcript_limit);

        Self {
            running: true,
            input: InputState::new(),
            recall: CommandRecall::new(),
            simulator,
            transcript,
            scenario: config.scenario.clone(),
            scroll: 0,
        }
    }

    /// Handles an event and updates application state.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(_, _) | Event::Tick => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.running = false;
            }
            KeyCode::Char('l') if ctrl => {
                self.transcript.clear();
                self.scroll = 0;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Up => {
                if let Some(previous) = self.recall.older(&self.input.text) {
                    let previous = previous.to_string();
                    self.input.set(&previous);
                }
            }
            KeyCode::Down => {
                if let Some(next) = self.recall.newer() {
                    let next = next.to_string();
                    self.input.set(&next);
                }
            }
            KeyCode::PageUp => {
                let max = self.transcript.len().saturating_sub(1);
                self.scroll = (self.scroll + PAGE_SCROLL).min(max);
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_sub(PAGE_SCROLL);
            }
            KeyCode::Char(c) if !ctrl => self.input.insert(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
    }

    /// Submits the input line to the simulator and records the result.
    pub fn submit(&mut self) {
        let line = self.input.take();
        self.recall.push(&line);
        let response = self.simulator.execute(&line);
        self.transcript.record(&line, &response);
        self.scroll = 0;
    }

    /// The live prompt.
    pub fn prompt(&self) -> String {
        self.simulator.prompt()
    }
}
