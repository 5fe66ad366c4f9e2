//! Input widget for the TUI.
//!
//! A single input line preceded by the live device prompt.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Calculates the scroll offset needed to keep the cursor visible.
///
/// Returns the number of characters to skip from the start of the text.
pub fn calculate_scroll_offset(cursor: usize, available_width: usize) -> usize {
    cursor.saturating_sub(available_width)
}

/// Input bar widget.
pub struct InputBar<'a> {
    prompt: &'a str,
    text: &'a str,
    cursor: usize,
}

impl<'a> InputBar<'a> {
    pub fn new(prompt: &'a str, text: &'a str, cursor: usize) -> Self {
        Self {
            prompt,
            text,
            cursor,
        }
    }

    /// Columns taken by the prompt and the space after it.
    pub fn prompt_width(&self) -> usize {
        self.prompt.chars().count() + 1
    }

    /// Columns available for text inside the borders.
    pub fn text_width(&self, area: Rect) -> usize {
        // borders (2) + cursor cell (1)
        (area.width as usize).saturating_sub(3 + self.prompt_width())
    }

    /// Terminal position of the cursor.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let offset = calculate_scroll_offset(self.cursor, self.text_width(area));
        let x = area.x as usize + 1 + self.prompt_width() + self.cursor - offset;
        (x.min(u16::MAX as usize) as u16, area.y + 1)
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Input ");

        let prompt_style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);

        let offset = calculate_scroll_offset(self.cursor, self.text_width(area));
        let visible: String = self.text.chars().skip(offset).collect();

        let line = Line::from(vec![
            Span::styled(format!("{} ", self.prompt), prompt_style),
            Span::raw(visible),
        ]);

        Paragraph::new(line).block(block).render(area, buf);
    }
}
