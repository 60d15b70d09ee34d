//! # csvgrid
//!
//! Strict CSV parsing into rectangular grids of string values.
//!
//! The parser makes one linear pass over the complete input. Commas and
//! line breaks inside quoted regions are literal data; outside them they
//! separate fields and records. After tokenization every record's field
//! count is checked against the first record's, and any mismatch fails the
//! whole parse - either a fully rectangular [`Grid`] comes back, or an
//! error does.
//!
//! # Examples
//!
//! Parsing in-memory text:
//!
//! ```
//! use csvgrid::CsvParser;
//!
//! let grid = CsvParser::new().parse("a,\"b,c\",d\n1,2,3\n").unwrap();
//! assert_eq!(grid.row(0).unwrap(), ["a", "b,c", "d"]);
//! assert_eq!(grid.get(1, 2), Some("3"));
//! ```
//!
//! Reading from a file:
//!
//! ```no_run
//! use csvgrid::read_grid;
//!
//! let grid = read_grid("data.csv").unwrap();
//! println!("{} rows x {} columns", grid.row_count(), grid.column_count());
//! ```
//!
//! # Errors
//!
//! Two failure modes only, both recoverable: [`CsvError::Io`] when the
//! source cannot be read at all, and [`CsvError::IrregularColumns`] when
//! the records do not all share the same field count. No partial grid is
//! ever returned.

pub mod error;
pub mod parser;
pub mod reader;
pub mod types;

pub use error::{CsvError, Result};
pub use parser::CsvParser;
pub use reader::read_grid;
pub use types::Grid;
