//! Headless mode for scripted testing and automation.
//!
//! Runs the console without a terminal, executing scripted events against an
//! in-memory backend and capturing the rendered screen for verification.

mod events;
mod output;

pub use events::{parse_size, state_field, Assertion, Event, EventParser};
pub use output::{HeadlessOutput, OutputFormat, ScreenRenderer};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, SimError};
use crate::tui::app::App;
use crate::tui::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Configuration for headless mode execution.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Screen width in columns.
    pub width: u16,
    /// Screen height in rows.
    pub height: u16,
    pub output_format: OutputFormat,
    /// Whether to stop on first assertion failure.
    pub fail_fast: bool,
    /// Path to write output (None = stdout).
    pub output_file: Option<PathBuf>,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 30,
            output_format: OutputFormat::Text,
            fail_fast: false,
            output_file: None,
        }
    }
}

impl HeadlessConfig {
    /// Creates a HeadlessConfig from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let (width, height) = cli.parse_screen_size()?;
        let output_format = cli.parse_output_format()?;

        Ok(Self {
            width,
            height,
            output_format,
            fail_fast: cli.fail_fast,
            output_file: cli.output_file.clone(),
        })
    }
}

/// Result of headless execution.
#[derive(Debug)]
pub struct HeadlessResult {
    /// Final screen content as text.
    pub screen: String,
    pub screen_lines: Vec<String>,
    /// Full console transcript, including lines scrolled off screen.
    pub transcript: Vec<String>,
    pub events_executed: usize,
    pub duration: Duration,
    pub assertions_passed: usize,
    pub assertions_failed: usize,
    pub state: HeadlessState,
    /// Frame captures (for frames output mode).
    pub frames: Vec<Frame>,
}

/// Snapshot of application state for JSON output.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HeadlessState {
    /// Current mode label, e.g. `global-config`.
    pub mode: String,
    pub prompt: String,
    pub hostname: String,
    /// Interface being configured, if any.
    pub interface: Option<String>,
    pub input_text: String,
    pub running: bool,
    pub scroll: usize,
    pub transcript_lines: usize,
}

impl HeadlessState {
    fn from_app(app: &App) -> Self {
        let session = app.simulator.session();
        Self {
            mode: session.mode.kind().label().to_string(),
            prompt: app.prompt(),
            hostname: session.hostname.clone(),
            interface: session.active_interface().map(|id| id.to_string()),
            input_text: app.input.text.clone(),
            running: app.running,
            scroll: app.scroll,
            transcript_lines: app.transcript.len(),
        }
    }
}

/// A captured frame (screen state after an event).
#[derive(Debug, Clone)]
pub struct Frame {
    /// Frame number (0 = initial state).
    pub number: usize,
    /// Event that produced this frame (None for initial).
    pub event: Option<String>,
    pub screen: String,
}

/// Runs the console in headless mode.
pub struct HeadlessRunner {
    config: HeadlessConfig,
    terminal: Terminal<TestBackend>,
    app: App,
    events: Vec<Event>,
    frames: Vec<Frame>,
    start_time: Instant,
    assertions_passed: usize,
    assertions_failed: usize,
}

impl HeadlessRunner {
    /// Creates a new headless runner with a fresh device built from `sim_config`.
    pub fn new(config: HeadlessConfig, sim_config: &Config) -> Result<Self> {
        let backend = TestBackend::new(config.width, config.height);
        let terminal = Terminal::new(backend)
            .map_err(|e| SimError::internal(format!("Failed to create test terminal: {e}")))?;

        Ok(Self {
            config,
            terminal,
            app: App::new(sim_config),
            events: Vec::new(),
            frames: Vec::new(),
            start_time: Instant::now(),
            assertions_passed: 0,
            assertions_failed: 0,
        })
    }

    /// Loads a comma-separated event list.
    pub fn load_events(&mut self, input: &str) -> Result<()> {
        self.events = EventParser::new().parse_inline(input)?;
        Ok(())
    }

    /// Loads events from a script file, or stdin when `path` is `-`.
    pub fn load_script(&mut self, path: &str) -> Result<()> {
        let content = if path == "-" {
            use std::io::Read;
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| SimError::io(format!("Failed to read stdin: {e}")))?;
            buffer
        } else {
            std::fs::read_to_string(path)
                .map_err(|e| SimError::io(format!("Failed to read script file {path}: {e}")))?
        };

        self.events = EventParser::new().parse_all(&content)?;
        Ok(())
    }

    /// Runs the headless execution and returns the result.
    pub async fn run(mut self) -> Result<HeadlessResult> {
        self.start_time = Instant::now();

        self.capture_frame(None)?;

        let events = std::mem::take(&mut self.events);
        let mut events_executed = 0;

        for event in events {
            let event_str = event.to_string();
            debug!(event = %event_str, "Executing headless event");

            match &event {
                Event::Key(key_event) => {
                    self.app.handle_event(crate::tui::Event::Key(*key_event));
                }
                Event::Type(text) => {
                    for c in text.chars() {
                        self.app.input.insert(c);
                    }
                }
                Event::Line(text) => {
                    for c in text.chars() {
                        self.app.input.insert(c);
                    }
                    self.app.submit();
                }
                Event::Wait(duration) => {
                    tokio::time::sleep(*duration).await;
                }
                Event::Resize(w, h) => {
                    self.terminal
                        .resize(ratatui::layout::Rect::new(0, 0, *w, *h))
                        .map_err(|e| SimError::internal(format!("Resize failed: {e}")))?;
                }
                Event::Snapshot(_) => {
                    // Snapshots are captured as frames
                }
                Event::Assert(assertion) => {
                    self.draw()?;
                    let screen = self.render_screen();
                    if assertion.check(&screen, &self.app) {
                        self.assertions_passed += 1;
                    } else {
                        warn!(assertion = %event_str, "Headless assertion failed");
                        self.assertions_failed += 1;
                        if self.config.fail_fast {
                            events_executed += 1;
                            break;
                        }
                    }
                }
            }

            events_executed += 1;

            self.draw()?;

            if self.config.output_format == OutputFormat::Frames {
                self.capture_frame(Some(event_str))?;
            }

            if !self.app.running {
                break;
            }
        }

        self.draw()?;
        let screen = self.render_screen();
        let screen_lines = screen.lines().map(String::from).collect();

        Ok(HeadlessResult {
            screen,
            screen_lines,
            transcript: self.app.transcript.lines().to_vec(),
            events_executed,
            duration: self.start_time.elapsed(),
            assertions_passed: self.assertions_passed,
            assertions_failed: self.assertions_failed,
            state: HeadlessState::from_app(&self.app),
            frames: self.frames,
        })
    }

    fn draw(&mut self) -> Result<()> {
        let app = &self.app;
        self.terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| SimError::internal(format!("Failed to render: {e}")))?;
        Ok(())
    }

    fn render_screen(&self) -> String {
        ScreenRenderer::render(self.terminal.backend().buffer())
    }

    fn capture_frame(&mut self, event: Option<String>) -> Result<()> {
        self.draw()?;
        let screen = self.render_screen();
        let number = self.frames.len();
        self.frames.push(Frame {
            number,
            event,
            screen,
        });
        Ok(())
    }
}

/// Runs headless mode from CLI arguments. Returns the process exit code.
pub async fn run_headless(cli: &Cli, sim_config: &Config) -> Result<i32> {
    cli.validate_headless()?;

    let config = HeadlessConfig::from_cli(cli)?;
    let mut runner = HeadlessRunner::new(config.clone(), sim_config)?;

    if let Some(ref events) = cli.events {
        runner.load_events(events)?;
    } else if let Some(ref script_path) = cli.script {
        runner.load_script(script_path)?;
    }

    let result = runner.run().await?;
    let output_str = HeadlessOutput::new(config.output_format).format(&result);

    if let Some(ref path) = config.output_file {
        std::fs::write(path, &output_str).map_err(|e| {
            SimError::io(format!(
                "Failed to write output file {}: {e}",
                path.display()
            ))
        })?;
    } else {
        print!("{output_str}");
    }

    Ok(if result.assertions_failed > 0 { 1 } else { 0 })
}
