//! Delimited text tables and the numeric grid built from them.

use std::io::{self, BufRead};

use heatman_common::{HeaderMode, HeatmanResult};
use tracing::debug;

/// Width of the synthetic scaler strip in cells.
pub const SCALER_WIDTH: usize = 255;

/// Height of the synthetic scaler strip in cells.
pub const SCALER_HEIGHT: usize = 10;

/// Reads rows of text fields from comma separated (or otherwise delimited) text.
///
/// Fields may be double-quoted; a quoted field can contain the delimiter, line
/// breaks and `""` for a literal quote. Stray quotes inside unquoted fields
/// are kept as text, so only failures of the underlying reader are errors.
/// Bytes that are not valid UTF-8 decode to U+FFFD rather than failing.
/// Blank lines are skipped and rows may have different lengths.
pub struct TableReader<R> {
    inner: R,
    delimiter: char,
    raw: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> TableReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_delimiter(inner, ',')
    }

    pub fn with_delimiter(inner: R, delimiter: char) -> Self {
        Self {
            inner,
            delimiter,
            raw: Vec::new(),
            line_number: 0,
        }
    }

    /// Number of physical lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next row. Returns `Ok(None)` at end of input.
    pub fn next_row(&mut self) -> io::Result<Option<Vec<String>>> {
        loop {
            let mut line = String::new();
            if self.read_text(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            if trim_line_end(&line).is_empty() {
                continue;
            }
            return self.parse_record(line).map(Some);
        }
    }

    fn parse_record(&mut self, first: String) -> io::Result<Vec<String>> {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut at_field_start = true;
        let mut text = first;

        loop {
            let mut chars = trim_line_end(&text).chars().peekable();
            while let Some(c) = chars.next() {
                if in_quotes {
                    if c == '"' {
                        if chars.peek() == Some(&'"') {
                            chars.next();
                            field.push('"');
                        } else {
                            in_quotes = false;
                        }
                    } else {
                        field.push(c);
                    }
                } else if c == self.delimiter {
                    fields.push(std::mem::take(&mut field));
                    at_field_start = true;
                    continue;
                } else if c == '"' && at_field_start {
                    in_quotes = true;
                } else {
                    field.push(c);
                }
                at_field_start = false;
            }

            if !in_quotes {
                break;
            }

            // Quoted field spans a line break.
            if self.read_text(&mut text)? == 0 {
                break;
            }
            self.line_number += 1;
            field.push('\n');
        }

        fields.push(field);
        Ok(fields)
    }

    /// Read one physical line into `out`, replacing invalid UTF-8.
    fn read_text(&mut self, out: &mut String) -> io::Result<usize> {
        self.raw.clear();
        out.clear();
        let read = self.inner.read_until(b'\n', &mut self.raw)?;
        out.push_str(&String::from_utf8_lossy(&self.raw));
        Ok(read)
    }
}

impl<R: BufRead> Iterator for TableReader<R> {
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row().transpose()
    }
}

fn trim_line_end(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// One entry of the grid; `None` when the source text was not a number.
pub type Cell = Option<f64>;

/// Numeric table of cells after header stripping.
///
/// Rows keep their original lengths; `width` is the longest row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl Grid {
    /// Build a grid from already parsed rows.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let mut grid = Grid::default();
        for row in rows {
            grid.push_row(row);
        }
        grid
    }

    /// Read every row of a table, dropping header labels per `header_mode`.
    ///
    /// Cells that do not parse as numbers become absent; only I/O failures
    /// of the reader are returned as errors.
    pub fn from_reader<R: BufRead>(
        reader: &mut TableReader<R>,
        header_mode: HeaderMode,
    ) -> HeatmanResult<Self> {
        let mut grid = Grid::default();
        let mut skip_first = header_mode.has_column_header();

        while let Some(tokens) = reader.next_row()? {
            if skip_first {
                skip_first = false;
                continue;
            }
            grid.push_row(parse_row(&tokens, header_mode));
        }

        debug!(
            width = grid.width,
            height = grid.height(),
            absent = grid.absent_count(),
            lines = reader.line_number(),
            "Built grid from table"
        );
        Ok(grid)
    }

    /// The reference gradient: every row holds `j / 255` in column `j`.
    pub fn scaler() -> Self {
        let row: Vec<Cell> = (0..SCALER_WIDTH)
            .map(|j| Some(j as f64 / 255.0))
            .collect();
        Self::from_rows(vec![row; SCALER_HEIGHT])
    }

    fn push_row(&mut self, row: Vec<Cell>) {
        self.width = self.width.max(row.len());
        self.rows.push(row);
    }

    /// Maximum number of cells in any row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Value at column `x`, row `y`. Out-of-range positions are absent.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.rows.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of absent cells inside the `width` x `height` rectangle.
    pub fn absent_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|c| c.is_none()).count() + (self.width - row.len()))
            .sum()
    }
}

/// Convert the text fields of one row into cells.
pub fn parse_row(tokens: &[String], header_mode: HeaderMode) -> Vec<Cell> {
    let skip = usize::from(header_mode.has_row_header());
    tokens
        .iter()
        .skip(skip)
        .map(|token| token.parse::<f64>().ok())
        .collect()
}
