use crate::cell::CellValue;
use crate::error::{Result, TableError};
use indexmap::IndexMap;
use serde::Serialize;

/// One record: column names mapped to values, in schema order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: IndexMap<String, CellValue>,
}

impl Row {
    /// Create an empty row
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by column name
    pub fn get_value(&self, column: &str) -> Result<&CellValue> {
        self.cells
            .get(column)
            .ok_or_else(|| TableError::column_not_found(column))
    }

    /// Get a value by column name, if present
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Column names in schema order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Values in schema order
    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.cells.values()
    }

    /// (name, value) entries in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Borrow the underlying ordered map
    #[must_use]
    pub fn to_map(&self) -> &IndexMap<String, CellValue> {
        &self.cells
    }

    /// Assign a value. An existing column keeps its position, a new one is
    /// appended at the end.
    pub(crate) fn set(&mut self, column: &str, value: CellValue) {
        if let Some(cell) = self.cells.get_mut(column) {
            *cell = value;
        } else {
            self.cells.insert(column.to_string(), value);
        }
    }

    pub(crate) fn has_schema(&self, columns: &[String]) -> bool {
        self.cells.len() == columns.len()
            && self.cells.keys().zip(columns).all(|(a, b)| a == b)
    }
}

/// A repeated name keeps its first position and takes the last value, so a
/// row never holds two cells under one name.
impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
