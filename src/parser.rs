//! CSV tokenization with strict rectangularity validation

use std::iter::Peekable;
use std::mem;
use std::str::Chars;

use crate::error::{CsvError, Result};
use crate::types::Grid;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// CSV parser producing rectangular grids of string fields.
///
/// The parser is stateless: each [`parse`](CsvParser::parse) call scans a
/// complete input independently of any prior call.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser;

impl CsvParser {
    /// Create a new CSV parser.
    pub fn new() -> Self {
        CsvParser
    }

    /// Parse a complete CSV document into a rectangular grid.
    ///
    /// Commas and line breaks inside quoted regions are literal data;
    /// outside them they separate fields and records. After tokenization,
    /// every record's field count is checked against the first record's;
    /// the first mismatch fails with [`CsvError::IrregularColumns`] and no
    /// grid is returned.
    ///
    /// Empty input yields a grid with zero rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvgrid::CsvParser;
    ///
    /// let grid = CsvParser::new().parse("a,\"b,c\",d\n").unwrap();
    /// assert_eq!(grid.row(0).unwrap(), ["a", "b,c", "d"]);
    /// ```
    pub fn parse(&self, raw: &str) -> Result<Grid> {
        let rows = tokenize(raw);

        let expected = rows.first().map_or(0, Vec::len);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(CsvError::IrregularColumns {
                    row: index,
                    expected,
                    actual: row.len(),
                });
            }
        }

        Ok(Grid::from_rows(rows))
    }
}

/// Scanner states for the quote-aware tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// At the first character of a field; an opening quote is only
    /// recognized here.
    FieldStart,
    /// Inside an unquoted field; quote characters are literal data.
    Unquoted,
    /// Inside a quoted region; delimiters and line breaks are literal data.
    Quoted,
    /// A quote was just seen inside a quoted region; the next character
    /// decides between an escaped quote and the end of the region.
    QuotedQuoteSeen,
}

/// Accumulates one field plus the bookkeeping needed to decide whether a
/// quoted field keeps its surrounding quote pair.
#[derive(Default)]
struct FieldBuf {
    buf: String,
    /// Field began with an opening quote.
    quoted: bool,
    /// The quoted region ended with a matching closing quote.
    closed: bool,
    /// The quoted region consumed a delimiter, line break, or escaped
    /// quote pair.
    escaped: bool,
    /// Characters followed the closing quote.
    trailing: bool,
}

impl FieldBuf {
    fn push(&mut self, ch: char) {
        self.buf.push(ch);
    }

    /// Close the field and reset for the next one.
    ///
    /// A simple quoted literal (opened at field start, cleanly closed,
    /// nothing special inside, nothing after the closing quote) keeps its
    /// quote pair; every other quoted field has the pair stripped.
    fn finish(&mut self) -> String {
        let field = mem::take(self);
        if field.quoted && field.closed && !field.escaped && !field.trailing {
            format!("{QUOTE}{}{QUOTE}", field.buf)
        } else {
            field.buf
        }
    }
}

/// One linear pass over the input, splitting it into rows of fields.
fn tokenize(raw: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = FieldBuf::default();
    let mut state = State::FieldStart;
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        match state {
            State::FieldStart | State::Unquoted => match ch {
                QUOTE if state == State::FieldStart => {
                    field.quoted = true;
                    state = State::Quoted;
                }
                DELIMITER => {
                    row.push(field.finish());
                    state = State::FieldStart;
                }
                '\n' | '\r' => {
                    line_break(ch, &mut chars);
                    row.push(field.finish());
                    rows.push(mem::take(&mut row));
                    state = State::FieldStart;
                }
                _ => {
                    field.push(ch);
                    state = State::Unquoted;
                }
            },
            State::Quoted => match ch {
                QUOTE => state = State::QuotedQuoteSeen,
                DELIMITER => {
                    field.escaped = true;
                    field.push(ch);
                }
                '\n' | '\r' => {
                    // Data newline: keep the exact terminator bytes.
                    field.escaped = true;
                    field.buf.push_str(line_break(ch, &mut chars));
                }
                _ => field.push(ch),
            },
            State::QuotedQuoteSeen => match ch {
                QUOTE => {
                    // Escaped quote ("") decodes to one literal quote.
                    field.escaped = true;
                    field.push(QUOTE);
                    state = State::Quoted;
                }
                DELIMITER => {
                    field.closed = true;
                    row.push(field.finish());
                    state = State::FieldStart;
                }
                '\n' | '\r' => {
                    field.closed = true;
                    line_break(ch, &mut chars);
                    row.push(field.finish());
                    rows.push(mem::take(&mut row));
                    state = State::FieldStart;
                }
                _ => {
                    field.closed = true;
                    field.trailing = true;
                    field.push(ch);
                    state = State::Unquoted;
                }
            },
        }
    }

    // Close whatever is still in progress at end of input. An unterminated
    // quoted region ends at EOF with whatever accumulated.
    match state {
        State::QuotedQuoteSeen => {
            field.closed = true;
            row.push(field.finish());
            rows.push(row);
        }
        State::Unquoted | State::Quoted => {
            row.push(field.finish());
            rows.push(row);
        }
        State::FieldStart => {
            if !row.is_empty() {
                row.push(field.finish());
                rows.push(row);
            }
        }
    }

    rows
}

/// Consume the line-break sequence starting at `ch`, pairing CRLF into one
/// logical unit, and return the exact terminator bytes.
fn line_break(ch: char, chars: &mut Peekable<Chars<'_>>) -> &'static str {
    if ch == '\r' {
        if chars.peek() == Some(&'\n') {
            chars.next();
            "\r\n"
        } else {
            "\r"
        }
    } else {
        "\n"
    }
}
