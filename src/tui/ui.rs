//! UI rendering for the TUI.
//!
//! Defines the layout and renders all UI components.

use super::app::App;
use super::widgets::{header, input, lab, transcript};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Renders the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: header, content, input
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Console + lab panel
            Constraint::Length(3), // Input
        ])
        .split(area);

    // Content layout: console (65%) and lab panel (35%)
    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_layout[1]);

    render_header(frame, main_layout[0], app);
    render_transcript(frame, content_layout[0], app);
    render_lab(frame, content_layout[1], app);
    render_input(frame, main_layout[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.simulator.session();
    let widget = header::Header::new(&session.hostname, session.mode.kind());
    frame.render_widget(widget, area);
}

fn render_transcript(frame: &mut Frame, area: Rect, app: &App) {
    // The live prompt is drawn by the input bar.
    let lines = app.transcript.lines();
    let history = &lines[..lines.len().saturating_sub(1)];
    let widget = transcript::TranscriptPanel::new(history, app.scroll);
    frame.render_widget(widget, area);
}

fn render_lab(frame: &mut Frame, area: Rect, app: &App) {
    let widget = lab::LabPanel::new(&app.scenario, app.simulator.session().mode.kind());
    frame.render_widget(widget, area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let prompt = app.transcript.prompt();
    let widget = input::InputBar::new(prompt, &app.input.text, app.input.cursor);
    let cursor = widget.cursor_position(area);
    frame.render_widget(widget, area);
    frame.set_cursor_position(cursor);
}
