//! User interface rendering.

pub mod formatters;
mod scatter;
mod status_bar;
mod table_view;
mod theme;

use crate::app::{App, ViewMode};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(f.area());

    match app.view_mode {
        ViewMode::Scatter => scatter::draw_scatter(f, chunks[0], &app.scatter, &colors),
        ViewMode::Table => table_view::draw_table(f, chunks[0], &app.table, app.scroll_row, &colors),
    }

    status_bar::draw_status(f, chunks[1], &app.status, &colors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Roster;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn scatter_view_shows_title_and_axes() {
        let mut app = App::new(Roster::sample());
        let text = rendered_text(&mut app, 140, 45);
        assert!(text.contains("Age vs Salary"));
        assert!(text.contains("Age"));
        assert!(text.contains("Salary ($)"));
    }

    #[test]
    fn table_view_shows_headers_and_records() {
        let mut app = App::new(Roster::sample());
        app.cycle_view_mode();
        assert_eq!(app.view_mode, ViewMode::Table);

        let text = rendered_text(&mut app, 200, 40);
        assert!(text.contains("Postal Code"));
        assert!(text.contains("Alice Johnson"));
        assert!(text.contains("85000.0"));
        assert!(text.contains("10 records"));
    }

    #[test]
    fn empty_roster_renders_without_error() {
        let mut app = App::new(Roster::new(Vec::new()));
        let text = rendered_text(&mut app, 120, 40);
        assert!(text.contains("Age vs Salary"));

        app.cycle_view_mode();
        let text = rendered_text(&mut app, 200, 40);
        assert!(text.contains("0 records"));
    }

    #[test]
    fn status_bar_shows_current_status() {
        let mut app = App::new(Roster::sample());
        app.status = "Theme: Gruvbox Light".to_string();
        let text = rendered_text(&mut app, 140, 45);
        assert!(text.contains("Theme: Gruvbox Light"));
        assert!(text.contains("q: Quit"));
    }
}
