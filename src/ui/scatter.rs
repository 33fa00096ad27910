//! Scatter view - renders the age-versus-salary chart.

use crate::scatter::ScatterView;
use crate::ui::formatters::{format_axis_label, format_number};
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Terminal cells are roughly twice as tall as wide.
const CHAR_ASPECT_RATIO: f64 = 2.0;

/// Target width:height of the figure, in visual units.
const FIGURE_ASPECT: f64 = 10.0 / 6.0;

/// Draw the scatter chart, centered at roughly the figure aspect.
pub fn draw_scatter(f: &mut Frame<'_>, area: Rect, view: &ScatterView, colors: &ThemeColors) {
    if area.width < 4 || area.height < 4 {
        return;
    }
    let area = figure_area(area);

    let grid = view.grid_points();
    let mut datasets = Vec::new();
    if !grid.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(colors.gray))
                .data(&grid),
        );
    }
    datasets.push(
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.blue))
            .data(view.points()),
    );

    let [x_min, x_max] = view.x_bounds();
    let x_labels = vec![
        format_axis_label(x_min),
        format_axis_label((x_min + x_max) / 2.0),
        format_axis_label(x_max),
    ];
    let x_axis = Axis::default()
        .title("Age")
        .style(Style::default().fg(colors.fg0))
        .bounds([x_min, x_max])
        .labels(x_labels);

    let [y_min, y_max] = view.y_bounds();
    let y_labels = vec![
        format_number(y_min.round() as i64),
        format_number(((y_min + y_max) / 2.0).round() as i64),
        format_number(y_max.round() as i64),
    ];
    let y_axis = Axis::default()
        .title("Salary ($)")
        .style(Style::default().fg(colors.fg0))
        .bounds([y_min, y_max])
        .labels(y_labels);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .title(" Age vs Salary ")
                .title_style(Style::default().fg(colors.yellow)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

/// Largest centered rect matching the figure aspect, corrected for the
/// cell aspect of terminal fonts.
fn figure_area(area: Rect) -> Rect {
    let ratio = FIGURE_ASPECT * CHAR_ASPECT_RATIO; // width cells per height cell
    let max_w = f64::from(area.width);
    let max_h = f64::from(area.height);

    let (w, h) = if max_w >= max_h * ratio {
        (max_h * ratio, max_h)
    } else {
        (max_w, max_w / ratio)
    };

    let w = (w.floor() as u16).clamp(1, area.width);
    let h = (h.floor() as u16).clamp(1, area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
