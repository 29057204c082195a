use crate::cell::CellValue;
use crate::error::{Result, TableError};
use crate::row::Row;
use crate::table::{check_unique_columns, Table};
use std::io::Write;

/// Delimited-text parsing options
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Field delimiter (default: ',')
    pub delimiter: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions { delimiter: ',' }
    }
}

impl ParseOptions {
    /// Create options for TSV (tab-separated values)
    #[must_use]
    pub fn tsv() -> Self {
        ParseOptions { delimiter: '\t' }
    }

    /// Set the delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Table {
    /// Parse comma-separated text: a header line, then one line per row.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_options(text, &ParseOptions::default())
    }

    /// Parse delimited text with custom options.
    ///
    /// No line is skipped: a blank line (including a trailing one) is a row
    /// with zero cells and fails the cell-count check. Quoting is not
    /// supported; every delimiter splits.
    ///
    /// # Errors
    ///
    /// - `InsufficientInput` when there is no header (or a blank one) or no
    ///   data line
    /// - `SchemaMismatch` when a line's cell count differs from the header's
    /// - `DuplicateColumnName` when the header repeats a name
    pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Self> {
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        // A blank header names no columns, so the input has no header at all
        if lines.len() < 2 || lines[0].trim().is_empty() {
            return Err(TableError::InsufficientInput { lines: lines.len() });
        }

        let columns: Vec<String> = split_cells(lines[0], options.delimiter)
            .map(|name| name.trim().to_string())
            .collect();
        check_unique_columns(&columns)?;

        let mut rows = Vec::with_capacity(lines.len() - 1);
        for (offset, line) in lines.iter().enumerate().skip(1) {
            let cells: Vec<&str> = split_cells(line, options.delimiter).collect();
            if cells.len() != columns.len() {
                return Err(TableError::SchemaMismatch {
                    line: offset + 1,
                    expected: columns.len(),
                    actual: cells.len(),
                });
            }

            let row: Row = columns
                .iter()
                .zip(cells)
                .map(|(name, cell)| (name.as_str(), CellValue::parse(cell)))
                .collect();
            rows.push(row);
        }

        tracing::debug!(
            rows = rows.len(),
            columns = columns.len(),
            "parsed delimited text"
        );
        Ok(Table::from_parts(columns, rows))
    }

    /// Write the header and rows to a writer as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);

        csv_writer.write_record(self.columns())?;
        for row in self.rows() {
            let record: Vec<String> = row.values().map(ToString::to_string).collect();
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Convert the table to a CSV string
    #[must_use]
    pub fn to_csv_string(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into memory cannot fail
        let _ = self.write_csv(&mut buffer);
        String::from_utf8_lossy(&buffer).to_string()
    }
}

/// Split one line into cells. An empty line has no cells.
fn split_cells(line: &str, delimiter: char) -> impl Iterator<Item = &str> {
    let mut cells = line.split(delimiter);
    if line.is_empty() {
        cells.next();
    }
    cells
}
