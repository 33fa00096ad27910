//! Application state and logic.

use crate::clipboard;
use crate::data::Roster;
use crate::scatter::ScatterView;
use crate::table::TableView;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Which presenter fills the main pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Age-versus-salary scatter chart.
    #[default]
    Scatter,
    /// Full roster table.
    Table,
}

impl ViewMode {
    /// Get the next view mode in cycle.
    pub fn next(self) -> Self {
        match self {
            ViewMode::Scatter => ViewMode::Table,
            ViewMode::Table => ViewMode::Scatter,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            ViewMode::Scatter => "Scatter",
            ViewMode::Table => "Table",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The record store.
    pub roster: Roster,
    /// Tabular view of the roster.
    pub table: TableView,
    /// Scatter view of the roster.
    pub scatter: ScatterView,
    /// Current view mode.
    pub view_mode: ViewMode,
    /// Row scroll offset for the table view.
    pub scroll_row: usize,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
}

impl App {
    /// Create a new application instance over a roster.
    ///
    /// Both presenter views are built once here; the roster is never
    /// mutated afterwards.
    pub fn new(roster: Roster) -> Self {
        let table = TableView::new(roster.people());
        let scatter = ScatterView::new(roster.people());
        Self {
            roster,
            table,
            scatter,
            view_mode: ViewMode::default(),
            scroll_row: 0,
            theme: Theme::GruvboxDark,
            status: "Ready".to_string(),
        }
    }

    /// Cycle view mode.
    pub fn cycle_view_mode(&mut self) {
        self.view_mode = self.view_mode.next();
        self.status = format!("View: {}", self.view_mode.name());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Scroll the table view up.
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_row = self.scroll_row.saturating_sub(amount);
    }

    /// Scroll the table view down.
    pub fn scroll_down(&mut self, amount: usize) {
        let max_row = self.table.row_count().saturating_sub(1);
        self.scroll_row = (self.scroll_row + amount).min(max_row);
    }

    /// Copy the table as TSV to the system clipboard.
    pub fn copy_table(&mut self) {
        match clipboard::copy_table(&self.table) {
            Ok(()) => self.status = "Table copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_mode_cycles_back_to_scatter() {
        let mut app = App::new(Roster::sample());
        assert_eq!(app.view_mode, ViewMode::Scatter);
        app.cycle_view_mode();
        assert_eq!(app.view_mode, ViewMode::Table);
        app.cycle_view_mode();
        assert_eq!(app.view_mode, ViewMode::Scatter);
    }

    #[test]
    fn theme_cycles_and_updates_status() {
        let mut app = App::new(Roster::sample());
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxLight);
        assert_eq!(app.status, "Theme: Gruvbox Light");
    }

    #[test]
    fn scroll_clamps_to_table_rows() {
        let mut app = App::new(Roster::sample());
        app.scroll_down(100);
        assert_eq!(app.scroll_row, 9);
        app.scroll_up(3);
        assert_eq!(app.scroll_row, 6);
        app.scroll_up(100);
        assert_eq!(app.scroll_row, 0);
    }

    #[test]
    fn scroll_on_empty_roster_stays_put() {
        let mut app = App::new(Roster::new(Vec::new()));
        app.scroll_down(5);
        assert_eq!(app.scroll_row, 0);
    }

    #[test]
    fn views_are_built_from_the_roster() {
        let app = App::new(Roster::sample());
        assert_eq!(app.table.row_count(), app.roster.len());
        assert_eq!(app.scatter.len(), app.roster.len());
    }
}
