//! Lab panel widget for the TUI.
//!
//! Shows the exercise objective, the scenario addressing and the commands
//! accepted in the current mode.

use crate::commands::commands_for;
use crate::scenario::Scenario;
use crate::session::ModeKind;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const OBJECTIVE: &str =
    "Address the three interfaces, bring them up, add a default route to the ISP and apply an ACL.";

/// Lab panel widget.
pub struct LabPanel<'a> {
    scenario: &'a Scenario,
    mode: ModeKind,
}

impl<'a> LabPanel<'a> {
    pub fn new(scenario: &'a Scenario, mode: ModeKind) -> Self {
        Self { scenario, mode }
    }
}

impl Widget for LabPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let heading = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::Gray);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Lab ");

        let mut lines = vec![
            Line::from(Span::styled("Objective", heading)),
            Line::from(Span::styled(OBJECTIVE, dim)),
            Line::from(""),
            Line::from(Span::styled("Addressing", heading)),
        ];
        lines.extend(
            self.scenario
                .summary_lines()
                .into_iter()
                .map(|l| Line::from(Span::styled(l, dim))),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Commands ({})", self.mode),
            heading,
        )));
        lines.extend(
            commands_for(self.mode).map(|def| Line::from(Span::styled(def.usage, dim))),
        );

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
