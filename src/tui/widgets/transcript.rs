//! Transcript panel widget for the TUI.
//!
//! Shows the terminal transcript anchored to the bottom, minus the live
//! prompt which the input bar displays.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Transcript panel widget.
pub struct TranscriptPanel<'a> {
    lines: &'a [String],
    /// Lines scrolled up from the bottom.
    scroll: usize,
}

impl<'a> TranscriptPanel<'a> {
    /// `lines` should not include the live prompt.
    pub fn new(lines: &'a [String], scroll: usize) -> Self {
        Self { lines, scroll }
    }

    /// Range of `lines` visible in `height` rows.
    fn visible_range(&self, height: usize) -> std::ops::Range<usize> {
        let end = self.lines.len().saturating_sub(self.scroll);
        end.saturating_sub(height)..end
    }
}

fn style_for(line: &str) -> Style {
    if line.starts_with('%') {
        Style::default().fg(Color::Red)
    } else if line.contains('>') || line.contains('#') {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

impl Widget for TranscriptPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.scroll > 0 {
            format!(" Console (+{}) ", self.scroll)
        } else {
            " Console ".to_string()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title);

        let height = block.inner(area).height as usize;
        let lines: Vec<Line> = self.lines[self.visible_range(height)]
            .iter()
            .map(|l| Line::from(Span::styled(l.as_str(), style_for(l))))
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
