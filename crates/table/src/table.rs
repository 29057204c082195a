use crate::cell::CellValue;
use crate::column::Column;
use crate::error::{Result, TableError};
use crate::row::Row;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Direction for [`Table::sort_by_order`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Larger values first
    #[default]
    Descending,
    /// Smaller values first
    Ascending,
}

/// An ordered collection of rows sharing one schema.
///
/// Every row holds exactly the columns of the schema, in schema order.
/// Transforming operations consume the table and return the new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table with a schema and no rows
    ///
    /// # Errors
    ///
    /// Returns `TableError::DuplicateColumnName` if a name appears twice.
    pub fn with_columns<S: Into<String>>(columns: Vec<S>) -> Result<Self> {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        check_unique_columns(&columns)?;
        Ok(Table {
            columns,
            rows: Vec::new(),
        })
    }

    /// Build a table from records. The first row fixes the schema.
    ///
    /// # Errors
    ///
    /// Returns `TableError::InconsistentRow` if a later row has different
    /// column names or a different column order.
    pub fn from_rows(rows: Vec<Row>) -> Result<Self> {
        let columns: Vec<String> = rows
            .first()
            .map(|row| row.columns().map(str::to_string).collect())
            .unwrap_or_default();

        if let Some(index) = rows.iter().position(|row| !row.has_schema(&columns)) {
            return Err(TableError::InconsistentRow { index });
        }

        Ok(Table { columns, rows })
    }

    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Table { columns, rows }
    }

    // ===== Accessors =====

    /// Column names in schema order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index (0-based)
    pub fn get_row(&self, index: usize) -> Result<&Row> {
        self.rows.get(index).ok_or(TableError::RowIndexOutOfBounds {
            index,
            count: self.row_count(),
        })
    }

    /// Get a cell by row index and column name
    pub fn get_value(&self, index: usize, column: &str) -> Result<&CellValue> {
        self.get_row(index)?.get_value(column)
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Build the view of one column
    pub fn column(&self, name: &str) -> Result<Column<'_>> {
        let name = self
            .columns
            .iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| TableError::column_not_found(name))?;

        let values = self
            .rows
            .iter()
            .map(|row| row.get_value(name))
            .collect::<Result<Vec<_>>>()?;

        Ok(Column::new(name.as_str(), values))
    }

    // ===== Aggregation =====

    /// Greatest value in a numeric column.
    ///
    /// # Errors
    ///
    /// `ColumnNotFound` for an unknown column, `EmptyTable` when there are no
    /// rows, `TypeMismatch` when any value in the column is text.
    pub fn max_of(&self, column: &str) -> Result<CellValue> {
        self.column(column)?.max_value()
    }

    // ===== Computed Columns =====

    /// Assign `compute(row)` under `name` for every row.
    ///
    /// An existing column is overwritten in place; a new one is appended to
    /// the end of the schema. Row count, row order and other columns are
    /// unchanged. The first error returned by `compute` is passed through
    /// as is.
    pub fn with_computed_column<F>(mut self, name: &str, mut compute: F) -> Result<Self>
    where
        F: FnMut(&Row) -> Result<CellValue>,
    {
        let values = self
            .rows
            .iter()
            .map(&mut compute)
            .collect::<Result<Vec<_>>>()?;

        for (row, value) in self.rows.iter_mut().zip(values) {
            row.set(name, value);
        }
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }

        tracing::debug!(column = name, rows = self.rows.len(), "computed column");
        Ok(self)
    }

    // ===== Sorting =====

    /// Sort by a column, larger values first. Ties keep their prior order.
    pub fn sort_by(self, column: &str) -> Result<Self> {
        self.sort_by_order(column, SortOrder::Descending)
    }

    /// Sort by a column in the given direction. Ties keep their prior order.
    pub fn sort_by_order(self, column: &str, order: SortOrder) -> Result<Self> {
        let key = column.to_string();
        self.sort_by_with(column, move |a, b| {
            let ordering = match (a.get(&key), b.get(&key)) {
                (Some(x), Some(y)) => x.compare(y),
                _ => Ordering::Equal,
            };
            match order {
                SortOrder::Descending => ordering.reverse(),
                SortOrder::Ascending => ordering,
            }
        })
    }

    /// Sort with a caller-supplied comparator, which fully decides the
    /// ordering. The sort is stable.
    ///
    /// # Errors
    ///
    /// Returns `TableError::ColumnNotFound` if `column` is not in the schema.
    pub fn sort_by_with<F>(mut self, column: &str, compare: F) -> Result<Self>
    where
        F: FnMut(&Row, &Row) -> Ordering,
    {
        if !self.has_column(column) {
            return Err(TableError::column_not_found(column));
        }

        self.rows.sort_by(compare);

        tracing::debug!(column, rows = self.rows.len(), "sorted table");
        Ok(self)
    }
}

/// Reject a schema that names the same column twice.
pub(crate) fn check_unique_columns(columns: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    match columns.iter().find(|name| !seen.insert(name.as_str())) {
        Some(name) => Err(TableError::DuplicateColumnName { name: name.clone() }),
        None => Ok(()),
    }
}
