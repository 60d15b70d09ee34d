//! The rectangular grid produced by parsing

/// Row-major grid of string fields.
///
/// A `Grid` is only handed out by [`CsvParser::parse`] after the
/// rectangularity check, so every row it holds has the same length.
/// It is immutable after construction and independent of any prior parse.
///
/// [`CsvParser::parse`]: crate::parser::CsvParser::parse
///
/// # Examples
///
/// ```
/// use csvgrid::CsvParser;
///
/// let grid = CsvParser::new().parse("a,b\nc,d\n").unwrap();
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.column_count(), 2);
/// assert_eq!(grid.get(1, 0), Some("c"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Wrap validated rows. Callers must have verified rectangularity.
    pub(crate) fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Grid { rows }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of fields per row; 0 for an empty grid.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Check if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the field at (row, col) if both indices are in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }

    /// Get the row at `index` if it is in bounds.
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Consume the grid into its backing rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}
