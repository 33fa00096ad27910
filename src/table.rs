//! Tabular presenter - renders the roster as an aligned plain-text table.

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::data::{Person, COLUMNS, NUMERIC_COLUMNS};

/// A table-like view of the roster: one row per record, one column per
/// attribute, in declaration order. Building the view performs no
/// aggregation, filtering, or sorting.
#[derive(Debug, Clone)]
pub struct TableView {
    rows: Vec<[String; 11]>,
}

impl TableView {
    /// Build the view from a record sequence.
    pub fn new(people: &[Person]) -> Self {
        Self {
            rows: people.iter().map(Person::row).collect(),
        }
    }

    /// Column labels, in declaration order.
    pub fn columns(&self) -> &'static [&'static str; 11] {
        &COLUMNS
    }

    /// Data rows, in input order.
    pub fn rows(&self) -> &[[String; 11]] {
        &self.rows
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Display width of each column: the widest of the label and every cell.
    /// Columns are never truncated.
    pub fn column_widths(&self) -> [usize; 11] {
        let mut widths = [0usize; 11];
        for (w, label) in widths.iter_mut().zip(COLUMNS.iter()) {
            *w = label.width();
        }
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = (*w).max(cell.width());
            }
        }
        widths
    }

    /// Render the full table as aligned text: header, rule, data rows.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        out.push_str(&render_line(&COLUMNS.map(String::from), &widths));
        out.push('\n');

        let rule_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        out.push_str(&"-".repeat(rule_width));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&render_line(row, &widths));
            out.push('\n');
        }

        out
    }

    /// Write the rendered table and a record count to a display surface.
    pub fn write_to(&self, w: &mut impl Write) -> std::io::Result<()> {
        w.write_all(self.render().as_bytes())?;
        writeln!(w, "\n[{} records x {} columns]", self.row_count(), COLUMNS.len())
    }

    /// Tab-separated form (header plus rows), for clipboard export.
    pub fn to_tsv(&self) -> String {
        let mut out = COLUMNS.join("\t");
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out
    }
}

/// Align one row of cells. Numeric columns are right-aligned, text columns
/// left-aligned; widths are display widths, not byte lengths.
fn render_line(cells: &[String; 11], widths: &[usize; 11]) -> String {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let pad = width.saturating_sub(cell.width());
        if NUMERIC_COLUMNS[i] {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        } else {
            line.push_str(cell);
            // Trailing pad is dropped on the last column to avoid ragged line ends.
            if i + 1 < cells.len() {
                line.push_str(&" ".repeat(pad));
            }
        }
    }
    line
}
