//! Status bar UI component.

use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

const KEY_HINTS: &str = "q: Quit | Tab: View | j/k: Scroll | T: Theme | c: Copy | ?: Help ";

/// Draw the status bar: current status left, key hints right.
pub fn draw_status(f: &mut Frame<'_>, area: Rect, status: &str, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(KEY_HINTS.len() as u16),
        ])
        .split(area);

    let status_bar = Paragraph::new(format!(" {}", status))
        .style(Style::default().fg(colors.fg0).bg(colors.bg1));
    f.render_widget(status_bar, chunks[0]);

    let hints = Paragraph::new(KEY_HINTS).style(Style::default().fg(colors.gray).bg(colors.bg1));
    f.render_widget(hints, chunks[1]);
}
