//! Table view - renders the roster table through the terminal UI.

use crate::table::TableView;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{
        Block, Borders, Cell, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
    },
    Frame,
};

/// Draw the roster table with the given row scroll offset.
pub fn draw_table(
    f: &mut Frame<'_>,
    area: Rect,
    view: &TableView,
    scroll_row: usize,
    colors: &ThemeColors,
) {
    // Account for borders and the header row.
    let visible_rows = (area.height as usize).saturating_sub(4);

    let start_row = scroll_row.min(view.row_count().saturating_sub(1));
    let end_row = (start_row + visible_rows).min(view.row_count());

    let header_cells: Vec<Cell<'_>> = view
        .columns()
        .iter()
        .map(|label| {
            Cell::from(*label).style(
                Style::default()
                    .fg(colors.green)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    let rows: Vec<Row<'_>> = view.rows()[start_row..end_row]
        .iter()
        .map(|row| {
            Row::new(
                row.iter()
                    .map(|cell| Cell::from(cell.as_str()).style(Style::default().fg(colors.aqua)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widths: Vec<Constraint> = view
        .column_widths()
        .iter()
        .map(|&w| Constraint::Length(w as u16))
        .collect();

    let title = format!(" Roster | {} records ", view.row_count());
    let table = Table::new(rows, widths)
        .header(Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .title(title)
                .title_style(Style::default().fg(colors.yellow)),
        )
        .style(Style::default().fg(colors.fg0));

    f.render_widget(table, area);

    if view.row_count() > visible_rows {
        let mut scrollbar_state =
            ScrollbarState::new(view.row_count().saturating_sub(visible_rows)).position(start_row);
        f.render_stateful_widget(
            Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("^"))
                .end_symbol(Some("v")),
            area,
            &mut scrollbar_state,
        );
    }
}
