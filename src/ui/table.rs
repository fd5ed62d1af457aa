//! Table rendering for formatted output.

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// A box-drawn table.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    align: Vec<Align>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: &[&str]) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| h.chars().count()).collect();
        let align = vec![Align::Left; headers.len()];

        Self {
            headers,
            align,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Set the alignment of one column. Out of range columns are ignored.
    pub fn align(mut self, column: usize, align: Align) -> Self {
        if let Some(slot) = self.align.get_mut(column) {
            *slot = align;
        }
        self
    }

    /// Add a row to the table.
    pub fn add_row<S: AsRef<str>>(&mut self, row: &[S]) {
        let row: Vec<String> = row.iter().map(|s| s.as_ref().to_string()).collect();

        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(cell.chars().count());
        }

        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        lines.push(self.render_border('┌', '┬', '┐'));
        lines.push(self.render_row(&self.headers, false));
        lines.push(self.render_border('├', '┼', '┤'));
        for row in &self.rows {
            lines.push(self.render_row(row, true));
        }
        lines.push(self.render_border('└', '┴', '┘'));

        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn render_row(&self, row: &[String], aligned: bool) -> String {
        let mut s = String::from("│");

        for (i, &width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = " ".repeat(width - cell.chars().count().min(width));
            let align = if aligned { self.align[i] } else { Align::Left };
            match align {
                Align::Left => s.push_str(&format!(" {}{} │", cell, pad)),
                Align::Right => s.push_str(&format!(" {}{} │", pad, cell)),
            }
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_still_has_headers() {
        let table = Table::new(&["A", "B"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);

        let output = table.render();
        assert!(output.contains("│ A │ B │"));
    }

    #[test]
    fn columns_widen_to_fit() {
        let mut table = Table::new(&["Set", "Frames"]);
        table.add_row(&["only in A", "12"]);

        let output = table.render();
        assert!(output.contains("│ only in A │ 12     │"));
        assert!(output.starts_with("┌───────────┬────────┐"));
    }

    #[test]
    fn right_alignment_applies_to_rows_only() {
        let mut table = Table::new(&["Set", "Frames"]).align(1, Align::Right);
        table.add_row(&["common", "7"]);

        let output = table.render();
        assert!(output.contains("│ Set    │ Frames │"));
        assert!(output.contains("│ common │      7 │"));
    }

    #[test]
    fn missing_cells_are_blank() {
        let mut table = Table::new(&["A", "B", "C"]);
        table.add_row(&["x"]);
        assert!(table.render().contains("│ x │   │   │"));
    }

    #[test]
    fn line_count() {
        let mut table = Table::new(&["Set", "Frames"]);
        table.add_row(&["a", "1"]);
        table.add_row(&["b", "2"]);
        table.add_row(&["c", "3"]);

        // top border, header, separator, 3 rows, bottom border
        assert_eq!(table.render().lines().count(), 7);
    }

    #[test]
    fn unicode_cells_are_measured_by_chars() {
        let mut table = Table::new(&["K"]);
        table.add_row(&["██░"]);
        assert!(table.render().contains("│ ██░ │"));
    }
}
