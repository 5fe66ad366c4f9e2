//! Header widget for the TUI.
//!
//! Displays the application name and version on the left and the device
//! hostname and current mode on the right.

use crate::session::ModeKind;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};

/// Header bar widget.
pub struct Header<'a> {
    hostname: &'a str,
    mode: ModeKind,
}

impl<'a> Header<'a> {
    pub fn new(hostname: &'a str, mode: ModeKind) -> Self {
        Self { hostname, mode }
    }
}

fn mode_color(mode: ModeKind) -> Color {
    match mode {
        ModeKind::UserExec => Color::Gray,
        ModeKind::PrivilegedExec => Color::Green,
        ModeKind::GlobalConfig => Color::Yellow,
        ModeKind::InterfaceConfig => Color::Magenta,
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(style);
        }

        let left_text = format!(" routerlab v{}", env!("CARGO_PKG_VERSION"));
        let left_span = Span::styled(left_text, style);
        buf.set_span(area.x, area.y, &left_span, area.width);

        let host_text = format!(" [{}] ", self.hostname);
        let mode_text = format!("{} ", self.mode);
        let right_width = (host_text.len() + mode_text.len()) as u16;
        if right_width < area.width {
            let right_x = area.right().saturating_sub(right_width);
            buf.set_string(right_x, area.y, &host_text, style);
            let mode_style = Style::default().bg(Color::Blue).fg(mode_color(self.mode));
            buf.set_string(
                right_x + host_text.len() as u16,
                area.y,
                &mode_text,
                mode_style,
            );
        }
    }
}
