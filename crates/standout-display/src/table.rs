//! The table display: an append-only grid of cells plus its renderer.
//!
//! Cells are appended in column-then-row order. A cursor tracks where the next
//! value goes and wraps to a fresh row after the last column. A collection is
//! expanded down successive rows of its column, and the next record starts
//! below the deepest collection placed in the current one.
//!
//! ```text
//! record 1:  add_cell("7")  add_collection_cell(["a","b","c","d"])
//!
//!   id | tags |
//!   7  | a    |      Printed
//!      | …    |      Dotted
//!      | d    |      Ignored (stand-in: the collection's last element)
//!                    Printed "d" (already shown, row suppressed)
//! ```

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::cell::Cell;
use crate::config::DisplayConfig;
use crate::error::{DisplayError, Result};
use crate::util::{display_width, pad_right_with};

/// Upper bound on rows reserved up front from the caller's row hint.
const MAX_PREALLOCATED_ROWS: usize = 4096;

/// Accumulates stringified values and lays them out as a console table.
///
/// # Example
///
/// ```rust
/// use standout_display::TableDisplay;
///
/// let mut table = TableDisplay::new(["x", "y"], ["int", "int"], 1).unwrap();
/// table.add_cell("1");
/// table.add_cell("2");
///
/// assert_eq!(table.render_lines(), vec!["x | y | ", "1 | 2 | "]);
/// ```
#[derive(Clone, Debug)]
pub struct TableDisplay {
    names: Vec<String>,
    types: Vec<String>,
    table: Vec<Vec<Cell>>,
    widths: Vec<usize>,
    current_row: usize,
    current_column: usize,
    next_row: usize,
    row_hint: usize,
    records: usize,
    config: DisplayConfig,
}

impl TableDisplay {
    /// Create a table with the default [`DisplayConfig`].
    ///
    /// Row 0 holds the column names, written through the same path as data so
    /// they count toward column widths.
    pub fn new<N, T>(column_names: N, column_types: T, row_hint: usize) -> Result<Self>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self::with_config(column_names, column_types, row_hint, DisplayConfig::default())
    }

    /// Create a table with an explicit configuration.
    pub fn with_config<N, T>(
        column_names: N,
        column_types: T,
        row_hint: usize,
        config: DisplayConfig,
    ) -> Result<Self>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        let names: Vec<String> = column_names.into_iter().map(Into::into).collect();
        let types: Vec<String> = column_types.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(DisplayError::NoColumns);
        }
        if names.len() != types.len() {
            return Err(DisplayError::ColumnTypeMismatch {
                names: names.len(),
                types: types.len(),
            });
        }

        let columns = names.len();
        let mut table = Vec::with_capacity(row_hint.saturating_add(2).min(MAX_PREALLOCATED_ROWS));
        table.push(vec![Cell::Blank; columns]);

        let mut display = TableDisplay {
            names,
            types,
            table,
            widths: vec![0; columns],
            current_row: 0,
            current_column: 0,
            next_row: 1,
            row_hint,
            records: 0,
            config,
        };

        for index in 0..columns {
            let name = display.names[index].clone();
            display.add_cell(name);
        }
        // The header row is not a record.
        display.records = 0;

        debug!(columns, row_hint, "created table display");
        Ok(display)
    }

    /// Append a single value at the cursor.
    pub fn add_cell(&mut self, value: impl Into<String>) {
        let value = value.into();
        let (row, column) = (self.current_row, self.current_column);
        self.widen(column, display_width(&value));
        self.table[row][column] = Cell::Printed(value);
        self.advance();
    }

    /// Append a collection, one element per row, starting at the cursor.
    ///
    /// Only the first and last elements are shown when rendering; the second
    /// becomes the ellipsis marker and the rest are hidden. An empty
    /// collection leaves the slot blank.
    pub fn add_collection_cell<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let len = values.len();
        let (start, column) = (self.current_row, self.current_column);

        self.ensure_rows(start + len);
        for (index, value) in values.into_iter().enumerate() {
            let cell = Cell::for_collection(value, index, len);
            match &cell {
                Cell::Printed(s) => self.widen(column, display_width(s)),
                Cell::Dotted(s) => {
                    let width = display_width(s).max(self.config.dotted_width());
                    self.widen(column, width);
                }
                Cell::Ignored(_) | Cell::Blank => {}
            }
            self.table[start + index][column] = cell;
        }
        trace!(column, start, len, "placed collection");

        self.next_row = self.next_row.max(start + len);
        self.advance();
    }

    /// Number of trailing columns that do not fit in the width budget.
    ///
    /// Widths plus one delimiter per column are summed left to right; from the
    /// first column that pushes the total past `max_width`, every remaining
    /// column is dropped from [`render_lines`](Self::render_lines).
    pub fn columns_to_elide(&self) -> usize {
        let delimiter = self.config.delimiter_width();
        let mut total = 0;
        for (index, width) in self.widths.iter().enumerate() {
            total += width + delimiter;
            if total > self.config.max_width {
                return self.widths.len() - index;
            }
        }
        0
    }

    /// Lay out the table as lines, eliding what does not fit.
    ///
    /// Trailing columns past the width budget are dropped, shortened
    /// collections show first element, ellipsis and last element, and rows
    /// left with nothing to show are skipped.
    pub fn render_lines(&self) -> Vec<String> {
        let elided = self.columns_to_elide();
        let visible = self.column_count() - elided;
        if elided > 0 {
            debug!(elided, max_width = self.config.max_width, "eliding trailing columns");
        }

        // Set while a column is inside a shortened collection whose tail was
        // already printed.
        let mut eliding = vec![false; visible];
        let mut lines = Vec::new();

        for (row_index, row) in self.table.iter().enumerate() {
            let mut line = String::new();
            let mut is_empty = true;

            for (column, cell) in row.iter().take(visible).enumerate() {
                let text = match cell {
                    Cell::Blank => "",
                    Cell::Dotted(_) => self.config.ellipsis.as_str(),
                    Cell::Printed(s) => {
                        let shown = if eliding[column] { "" } else { s.as_str() };
                        eliding[column] = false;
                        shown
                    }
                    Cell::Ignored(_) => {
                        if eliding[column] {
                            ""
                        } else {
                            eliding[column] = true;
                            self.collection_tail(row_index, column)
                        }
                    }
                };

                if !text.is_empty() {
                    is_empty = false;
                }
                line.push_str(&pad_right_with(text, self.widths[column], self.config.fill));
                line.push_str(&self.config.delimiter);
            }

            if !is_empty {
                lines.push(line);
            }
        }
        lines
    }

    /// Write the rendered table to `out`, one line per row.
    pub fn render_to<W: Write>(&self, mut out: W) -> Result<()> {
        for line in self.render_lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Print the rendered table to stdout.
    pub fn print(&self) -> Result<()> {
        let stdout = io::stdout();
        self.render_to(stdout.lock())
    }

    /// Dump every cell, hidden or not, ignoring the width budget.
    ///
    /// Unlike rendering, blank rows are kept.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for row in &self.table {
            for (column, cell) in row.iter().enumerate() {
                out.push_str(&pad_right_with(
                    cell.representation(),
                    self.widths[column],
                    self.config.fill,
                ));
                out.push_str(&self.config.delimiter);
            }
            out.push('\n');
        }
        out
    }

    pub fn column_count(&self) -> usize {
        self.names.len()
    }

    /// Number of grid rows, header and trailing blank row included.
    pub fn row_count(&self) -> usize {
        self.table.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Declared column types. Stored for callers; never used for layout.
    pub fn column_types(&self) -> &[String] {
        &self.types
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.table.get(row)?.get(column)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.table
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn row_hint(&self) -> usize {
        self.row_hint
    }

    /// Number of records completed so far (full passes over all columns).
    pub fn records(&self) -> usize {
        self.records
    }

    /// Whether fewer records than the row hint have been appended.
    pub fn has_next(&self) -> bool {
        self.records < self.row_hint
    }

    fn widen(&mut self, column: usize, width: usize) {
        if self.widths[column] < width {
            self.widths[column] = width;
        }
    }

    fn ensure_rows(&mut self, count: usize) {
        let columns = self.column_count();
        while self.table.len() < count {
            self.table.push(vec![Cell::Blank; columns]);
        }
    }

    fn advance(&mut self) {
        self.current_column += 1;
        if self.current_column == self.column_count() {
            self.current_row = self.next_row;
            self.current_column = 0;
            self.next_row = self.current_row + 1;
            self.ensure_rows(self.current_row + 1);
            self.records += 1;
        }
    }

    /// The printed element that closes the shortened collection passing
    /// through `row`.
    fn collection_tail(&self, row: usize, column: usize) -> &str {
        self.table[row + 1..]
            .iter()
            .map(|cells| &cells[column])
            .find(|cell| cell.is_printed())
            .map(Cell::representation)
            .unwrap_or_else(|| {
                panic!("collection in column {column} has no printed element after row {row}")
            })
    }
}

impl fmt::Display for TableDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(name: &str) -> TableDisplay {
        TableDisplay::new([name], ["string"], 5).unwrap()
    }

    #[test]
    fn header_sets_widths() {
        let table = TableDisplay::new(["id", "name"], ["int", "string"], 0).unwrap();
        assert_eq!(table.widths(), &[2, 4]);
        assert_eq!(table.cell(0, 1), Some(&Cell::Printed("name".into())));
        assert_eq!(table.records(), 0);
    }

    #[test]
    fn rejects_no_columns() {
        let err = TableDisplay::new(Vec::<String>::new(), Vec::<String>::new(), 0).unwrap_err();
        assert!(matches!(err, DisplayError::NoColumns));
    }

    #[test]
    fn rejects_mismatched_types() {
        let err = TableDisplay::new(["a", "b"], ["int"], 0).unwrap_err();
        assert!(matches!(
            err,
            DisplayError::ColumnTypeMismatch { names: 2, types: 1 }
        ));
    }

    #[test]
    fn types_are_kept() {
        let table = TableDisplay::new(["a"], ["vector<float>"], 0).unwrap();
        assert_eq!(table.column_types(), &["vector<float>".to_string()]);
    }

    #[test]
    fn cursor_wraps_to_new_row() {
        let mut table = TableDisplay::new(["a", "b"], ["int", "int"], 2).unwrap();
        table.add_cell("1");
        table.add_cell("2");
        table.add_cell("3");
        assert_eq!(table.cell(1, 0), Some(&Cell::Printed("1".into())));
        assert_eq!(table.cell(1, 1), Some(&Cell::Printed("2".into())));
        assert_eq!(table.cell(2, 0), Some(&Cell::Printed("3".into())));
        assert_eq!(table.cell(2, 1), Some(&Cell::Blank));
        assert_eq!(table.records(), 1);
    }

    #[test]
    fn two_column_scenario() {
        let mut table = TableDisplay::new(["x", "y"], ["int", "int"], 1).unwrap();
        table.add_cell("1");
        table.add_cell("2");
        assert_eq!(table.render_lines(), vec!["x | y | ", "1 | 2 | "]);
    }

    #[test]
    fn long_collection_states() {
        let mut table = single("v");
        table.add_collection_cell(["a", "b", "c", "d", "e"]);
        assert_eq!(table.cell(1, 0), Some(&Cell::Printed("a".into())));
        assert_eq!(table.cell(2, 0), Some(&Cell::Dotted("b".into())));
        assert_eq!(table.cell(3, 0), Some(&Cell::Ignored("c".into())));
        assert_eq!(table.cell(4, 0), Some(&Cell::Ignored("d".into())));
        assert_eq!(table.cell(5, 0), Some(&Cell::Printed("e".into())));
    }

    #[test]
    fn long_collection_renders_first_dots_last() {
        let mut table = single("v");
        table.add_collection_cell(["a", "b", "c", "d", "e"]);
        assert_eq!(table.widths(), &[3]);
        assert_eq!(
            table.render_lines(),
            vec!["v   | ", "a   | ", "…   | ", "e   | "]
        );
    }

    #[test]
    fn four_element_collection_pulls_tail_forward() {
        let mut table = single("v");
        table.add_collection_cell(["10", "20", "30", "40"]);
        assert_eq!(
            table.render_lines(),
            vec!["v   | ", "10  | ", "…   | ", "40  | "]
        );
    }

    #[test]
    fn three_element_collection() {
        let mut table = single("v");
        table.add_collection_cell(["a", "b", "c"]);
        assert_eq!(
            table.render_lines(),
            vec!["v   | ", "a   | ", "…   | ", "c   | "]
        );
    }

    #[test]
    fn two_element_collection_has_no_ellipsis() {
        let mut table = single("v");
        table.add_collection_cell(["a", "b"]);
        assert_eq!(table.widths(), &[1]);
        assert_eq!(table.render_lines(), vec!["v | ", "a | ", "b | "]);
    }

    #[test]
    fn single_element_collection_matches_add_cell() {
        let mut collection = single("v");
        collection.add_collection_cell(["only"]);
        let mut plain = single("v");
        plain.add_cell("only");
        assert_eq!(collection.render_lines(), plain.render_lines());
        assert_eq!(collection.serialize(), plain.serialize());
    }

    #[test]
    fn empty_collection_leaves_blank() {
        let mut table = TableDisplay::new(["v", "w"], ["vec", "int"], 1).unwrap();
        table.add_collection_cell(Vec::<String>::new());
        table.add_cell("7");
        assert_eq!(table.cell(1, 0), Some(&Cell::Blank));
        assert_eq!(table.render_lines(), vec!["v | w | ", "  | 7 | "]);
    }

    #[test]
    fn next_record_starts_below_deepest_collection() {
        let mut table = TableDisplay::new(["v", "n"], ["vec", "int"], 2).unwrap();
        table.add_collection_cell(["1", "2", "3"]);
        table.add_cell("x");
        table.add_cell("4");
        table.add_cell("y");
        assert_eq!(table.cell(4, 0), Some(&Cell::Printed("4".into())));
        assert_eq!(table.cell(4, 1), Some(&Cell::Printed("y".into())));
        assert_eq!(table.cell(2, 1), Some(&Cell::Blank));
        assert_eq!(
            table.render_lines(),
            vec![
                "v   | n | ",
                "1   | x | ",
                "…   |   | ",
                "3   |   | ",
                "4   | y | ",
            ]
        );
    }

    #[test]
    fn collections_of_different_lengths_side_by_side() {
        let mut table = TableDisplay::new(["a", "b"], ["vec", "vec"], 1).unwrap();
        table.add_collection_cell(["1", "2", "3", "4", "5", "6"]);
        table.add_collection_cell(["x", "y"]);
        let lines = table.render_lines();
        assert_eq!(
            lines,
            vec!["a   | b | ", "1   | x | ", "…   | y | ", "6   |   | "]
        );
        // Every grid row keeps one slot per column.
        assert!(table.rows().iter().all(|row| row.len() == 2));
    }

    #[test]
    fn serialize_keeps_hidden_elements() {
        let mut table = single("v");
        table.add_collection_cell(["a", "b", "c", "d", "e"]);
        assert_eq!(
            table.serialize(),
            "v   | \na   | \nb   | \nc   | \nd   | \ne   | \n    | \n"
        );
        assert_eq!(table.to_string(), table.serialize());
    }

    #[test]
    fn ignored_elements_do_not_widen() {
        let mut table = single("v");
        table.add_collection_cell(["a", "b", "a-very-long-interior-value", "e"]);
        assert_eq!(table.widths(), &[3]);
    }

    #[test]
    fn dotted_element_widens_past_floor() {
        let mut table = single("v");
        table.add_collection_cell(["a", "bbbbb", "c"]);
        assert_eq!(table.widths(), &[5]);
    }

    #[test]
    fn columns_to_elide_counts_trailing_columns() {
        let config = DisplayConfig::default().max_width(10);
        let table =
            TableDisplay::with_config(["aaa", "bbb", "ccc"], ["s", "s", "s"], 0, config).unwrap();
        // 6 after the first column, 12 after the second.
        assert_eq!(table.columns_to_elide(), 2);
        assert_eq!(table.render_lines(), vec!["aaa | "]);
    }

    #[test]
    fn columns_to_elide_zero_when_fits() {
        let table = TableDisplay::new(["a", "b"], ["s", "s"], 0).unwrap();
        assert_eq!(table.columns_to_elide(), 0);
    }

    #[test]
    fn serialize_ignores_budget() {
        let config = DisplayConfig::default().max_width(4);
        let mut table = TableDisplay::with_config(["a", "b"], ["s", "s"], 1, config).unwrap();
        table.add_cell("1");
        table.add_cell("2");
        assert_eq!(table.render_lines(), vec!["a | ", "1 | "]);
        assert_eq!(table.serialize(), "a | b | \n1 | 2 | \n  |   | \n");
    }

    #[test]
    fn wide_fill_keeps_columns_aligned() {
        let config = DisplayConfig::default().fill('＿');
        let mut table = TableDisplay::with_config(["abc", "d"], ["s", "s"], 1, config).unwrap();
        table.add_cell("x");
        table.add_cell("y");
        let lines = table.render_lines();
        assert_eq!(lines, vec!["abc | d | ", "x＿ | y | "]);
        assert_eq!(display_width(&lines[0]), display_width(&lines[1]));
    }

    #[test]
    fn custom_punctuation() {
        let config = DisplayConfig::default().fill('.').delimiter("|").ellipsis("...");
        let mut table = TableDisplay::with_config(["col"], ["s"], 1, config).unwrap();
        table.add_collection_cell(["1", "2", "3", "4"]);
        assert_eq!(table.render_lines(), vec!["col|", "1..|", "...|", "4..|"]);
    }

    #[test]
    fn render_is_repeatable() {
        let mut table = single("v");
        table.add_collection_cell(["a", "b", "c", "d", "e"]);
        assert_eq!(table.render_lines(), table.render_lines());
    }

    #[test]
    fn render_to_writes_lines() {
        let mut table = TableDisplay::new(["x"], ["int"], 1).unwrap();
        table.add_cell("1");
        let mut out = Vec::new();
        table.render_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "x | \n1 | \n");
    }

    #[test]
    fn has_next_tracks_row_hint() {
        let mut table = TableDisplay::new(["x"], ["int"], 2).unwrap();
        assert!(table.has_next());
        table.add_cell("1");
        assert!(table.has_next());
        table.add_cell("2");
        assert!(!table.has_next());
        assert_eq!(table.records(), 2);
    }

    #[test]
    fn wide_characters_measured_by_columns() {
        let mut table = single("名前");
        table.add_cell("a");
        assert_eq!(table.widths(), &[4]);
        assert_eq!(table.render_lines(), vec!["名前 | ", "a    | "]);
    }

    #[test]
    fn out_of_range_cell_is_none() {
        let table = single("v");
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(99, 0), None);
    }
}
