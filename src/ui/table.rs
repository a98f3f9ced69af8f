//! Borderless column-aligned tables.
//!
//! Column widths come from the display width of each cell's plain text, so
//! styling never shifts the alignment.

use super::theme::{Segment, Theme};

const SEPARATOR: &str = "  ";

/// A left-aligned table without borders.
#[derive(Debug)]
pub struct Table {
    rows: Vec<Vec<Segment>>,
    column_widths: Vec<usize>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Create a table whose columns are separated by two spaces.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            column_widths: Vec::new(),
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<Segment>) {
        // Update column widths
        for (i, cell) in row.iter().enumerate() {
            let width = cell.width();
            match self.column_widths.get_mut(i) {
                Some(current) => *current = (*current).max(width),
                None => self.column_widths.push(width),
            }
        }

        self.rows.push(row);
    }

    /// Render the table, one line per row, without a trailing newline.
    pub fn render(&self, theme: &Theme) -> String {
        self.rows
            .iter()
            .map(|row| self.render_row(row, theme))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_row(&self, row: &[Segment], theme: &Theme) -> String {
        // Padding after the last non-empty cell would only be trailing space.
        let Some(last) = row.iter().rposition(|cell| !cell.text.is_empty()) else {
            return String::new();
        };

        let mut cells = Vec::with_capacity(last + 1);
        for (i, cell) in row.iter().take(last + 1).enumerate() {
            let mut s = theme.paint(cell);
            if i < last {
                let pad = self.column_widths[i].saturating_sub(cell.width());
                s.push_str(&" ".repeat(pad));
            }
            cells.push(s);
        }

        cells.join(SEPARATOR)
    }
}
