//! Fixed-width console tables.
//!
//! Rows are `|`-delimited and every cell is centered in an equal share of
//! the table width.

/// Default console table width.
pub const TABLE_WIDTH: usize = 77;

/// Narrowest table that still fits four columns of an ellipsis each.
pub const MIN_TABLE_WIDTH: usize = 4 * (3 + 1) + 4;

/// Ellipsis appended to truncated cells.
const ELLIPSIS: &str = "...";

/// Renders rule lines and rows of a fixed-width table.
#[derive(Clone, Debug)]
pub struct TableWriter {
    width: usize,
}

impl TableWriter {
    /// Create a writer for the given total width.
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Total table width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Width of each cell when the row has `columns` cells.
    pub fn column_width(&self, columns: usize) -> usize {
        if columns == 0 {
            return 0;
        }
        self.width.saturating_sub(columns) / columns
    }

    /// Horizontal rule spanning the table.
    pub fn rule(&self) -> String {
        "-".repeat(self.width)
    }

    /// One row with every cell centered.
    pub fn row<S: AsRef<str>>(&self, columns: &[S]) -> String {
        let width = self.column_width(columns.len());
        let mut row = String::from("|");
        for column in columns {
            row.push_str(&align_centre(column.as_ref(), width));
            row.push('|');
        }
        row
    }

    /// Full table: rule, header, rule, rows, rule.
    pub fn render<S: AsRef<str>>(&self, header: &[S], rows: &[Vec<String>]) -> Vec<String> {
        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(self.rule());
        lines.push(self.row(header));
        lines.push(self.rule());
        for row in rows {
            lines.push(self.row(row));
        }
        lines.push(self.rule());
        lines
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new(TABLE_WIDTH)
    }
}

/// Center `text` in a cell of `width` characters.
///
/// Longer text is cut to `width - 3` characters followed by `...`. Odd
/// padding goes to the right.
pub fn align_centre(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let text: String = if len > width {
        let keep = width.saturating_sub(ELLIPSIS.len());
        text.chars().take(keep).chain(ELLIPSIS.chars()).take(width).collect()
    } else {
        text.to_string()
    };

    if text.is_empty() {
        return " ".repeat(width);
    }

    let len = text.chars().count();
    let padded_right = width.saturating_sub(width.saturating_sub(len) / 2);
    let right = padded_right.saturating_sub(len);
    let left = width.saturating_sub(len + right);

    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_centre_even_padding() {
        assert_eq!(align_centre("Name", 10), "   Name   ");
    }

    #[test]
    fn test_align_centre_odd_padding_favors_right() {
        assert_eq!(align_centre("Abc", 10), "   Abc    ");
        assert_eq!(align_centre("x", 4), " x  ");
    }

    #[test]
    fn test_align_centre_truncates() {
        let cell = align_centre("VeryLongPluginName", 10);
        assert_eq!(cell, "VeryLon...");
        assert_eq!(cell.len(), 10);
    }

    #[test]
    fn test_align_centre_never_exceeds_narrow_cells() {
        assert_eq!(align_centre("Alpha", 3), "...");
        assert_eq!(align_centre("Alpha", 2), "..");
        assert_eq!(align_centre("Alpha", 0), "");

        let table = TableWriter::new(8);
        assert_eq!(table.row(&["Name", "Author", "Version", "Configuration"]), "|.|.|.|.|");
    }

    #[test]
    fn test_align_centre_exact_and_empty() {
        assert_eq!(align_centre("abcdefghij", 10), "abcdefghij");
        assert_eq!(align_centre("", 5), "     ");
    }

    #[test]
    fn test_align_centre_counts_chars() {
        let cell = align_centre("Größe", 9);
        assert_eq!(cell, "  Größe  ");
        assert_eq!(cell.chars().count(), 9);
    }

    #[test]
    fn test_row_layout() {
        let table = TableWriter::default();
        let row = table.row(&["Name", "Author", "Version", "Configuration"]);

        assert_eq!(table.column_width(4), 18);
        assert_eq!(row.len(), TABLE_WIDTH);
        assert_eq!(
            row,
            "|       Name       |      Author      |     Version      |  Configuration   |"
        );
    }

    #[test]
    fn test_render_empty_table() {
        let table = TableWriter::default();
        let lines = table.render(&["A", "B"], &[]);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "-".repeat(77));
        assert_eq!(lines[2], lines[0]);
        assert_eq!(lines[3], lines[0]);
    }
}
