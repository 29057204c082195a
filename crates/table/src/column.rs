use crate::cell::CellValue;
use crate::error::{Result, TableError};

/// Read-only view over one column of a table.
///
/// A column is never stored: it borrows the values from the rows and is
/// rebuilt whenever it is requested, so it always reflects the current
/// rows and schema.
#[derive(Debug, Clone)]
pub struct Column<'t> {
    name: &'t str,
    values: Vec<&'t CellValue>,
}

impl<'t> Column<'t> {
    pub(crate) fn new(name: &'t str, values: Vec<&'t CellValue>) -> Self {
        Column { name, values }
    }

    #[must_use]
    pub fn name(&self) -> &'t str {
        self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a row position
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'t CellValue> {
        self.values.get(index).copied()
    }

    pub fn values(&self) -> impl Iterator<Item = &'t CellValue> + '_ {
        self.values.iter().copied()
    }

    /// Greatest numeric value in the column.
    ///
    /// The search is seeded with the first row's value, so a column whose
    /// values are all negative reports its true maximum.
    pub fn max_value(&self) -> Result<CellValue> {
        let mut values = self.values.iter().copied().enumerate();
        let (_, first) = values.next().ok_or(TableError::EmptyTable)?;
        let mut max = self.numeric(0, first)?;

        for (row, value) in values {
            let candidate = self.numeric(row, value)?;
            if candidate.compare(max).is_gt() {
                max = candidate;
            }
        }

        Ok(max.clone())
    }

    /// Longest rendered text among the values (0 for an empty column)
    #[must_use]
    pub fn max_width(&self) -> usize {
        self.values
            .iter()
            .map(|value| value.text_width())
            .max()
            .unwrap_or(0)
    }

    fn numeric(&self, row: usize, value: &'t CellValue) -> Result<&'t CellValue> {
        if value.is_number() {
            Ok(value)
        } else {
            Err(TableError::TypeMismatch {
                column: self.name.to_string(),
                row,
                found: value.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_positional_access() {
        let values = [CellValue::from("Lagos"), CellValue::from("Tokyo")];
        let column = Column::new("city", values.iter().collect());

        assert_eq!(column.name(), "city");
        assert_eq!(column.len(), 2);
        assert_eq!(column.get(1), Some(&CellValue::from("Tokyo")));
        assert_eq!(column.get(2), None);
        let all: Vec<&CellValue> = column.values().collect();
        assert_eq!(all, vec![&values[0], &values[1]]);
    }

    #[test]
    fn test_max_value_seeded_with_first_row() {
        let values = [CellValue::Int(-7), CellValue::Int(-3), CellValue::Float(-4.5)];
        let column = Column::new("delta", values.iter().collect());

        assert_eq!(column.max_value().unwrap(), CellValue::Int(-3));
    }

    #[test]
    fn test_max_value_mixed_representation() {
        let values = [CellValue::Int(3), CellValue::Float(3.5), CellValue::Int(2)];
        let column = Column::new("x", values.iter().collect());

        assert_eq!(column.max_value().unwrap(), CellValue::Float(3.5));
    }

    #[test]
    fn test_max_value_rejects_text() {
        let values = [CellValue::Int(3), CellValue::from("n/a")];
        let column = Column::new("x", values.iter().collect());

        assert!(matches!(
            column.max_value(),
            Err(TableError::TypeMismatch { row: 1, .. })
        ));
    }

    #[test]
    fn test_max_value_empty() {
        let column = Column::new("x", Vec::new());
        assert!(matches!(column.max_value(), Err(TableError::EmptyTable)));
    }

    #[test]
    fn test_max_width() {
        let values = [CellValue::from("Lagos"), CellValue::from("New York City")];
        let column = Column::new("city", values.iter().collect());

        assert_eq!(column.max_width(), 13);
        assert_eq!(Column::new("x", Vec::new()).max_width(), 0);
    }
}
