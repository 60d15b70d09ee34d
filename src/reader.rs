//! CSV file reading: whole-file slurp feeding the parser

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::parser::CsvParser;
use crate::types::Grid;

/// Read a CSV file into a rectangular grid.
///
/// The file is opened, read fully, and released before tokenization
/// starts, so the parse itself never blocks on I/O. A missing or
/// unreadable path surfaces as [`CsvError::Io`](crate::CsvError::Io)
/// with the original error untouched; tokenization never begins in
/// that case.
///
/// # Examples
///
/// ```no_run
/// use csvgrid::read_grid;
///
/// let grid = read_grid("data.csv").unwrap();
/// for row in grid.rows() {
///     println!("{:?}", row);
/// }
/// ```
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let raw = fs::read_to_string(path)?;
    CsvParser::new().parse(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CsvError;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_grid("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, CsvError::Io(_)));
    }
}
