//! Error types for CSV parsing

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CsvError>;

/// Errors surfaced while turning CSV text into a grid.
///
/// There are exactly two failure modes: the source could not be read at
/// all, or the parsed records do not all share the same field count.
/// No partial grid is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The underlying content could not be obtained (missing path,
    /// unreadable stream). Raised before tokenization begins and
    /// propagated verbatim.
    #[error("failed to read CSV source: {0}")]
    Io(#[from] std::io::Error),

    /// A record's field count differs from the first record's.
    #[error("irregular columns at row {row}: expected {expected} fields, found {actual}")]
    IrregularColumns {
        /// 0-based index of the first offending row.
        row: usize,
        /// Field count of the first row.
        expected: usize,
        /// Field count actually found.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_columns_message() {
        let err = CsvError::IrregularColumns {
            row: 3,
            expected: 5,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "irregular columns at row 3: expected 5 fields, found 2"
        );
    }

    #[test]
    fn test_io_error_wraps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = CsvError::from(io);
        assert!(matches!(err, CsvError::Io(_)));
        assert!(err.to_string().contains("no such file"));
    }
}
