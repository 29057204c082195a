use crate::cell::CellValue;
use crate::error::{Result, TableError};
use crate::row::Row;
use crate::table::Table;

/// Compute function scaling `source` to 0-100 against `max`.
///
/// The result is `round(value * 100 / max)` as an integer, rounding half
/// away from zero (49.5 becomes 50).
#[allow(clippy::float_cmp)]
pub fn rank_against(source: impl Into<String>, max: f64) -> impl Fn(&Row) -> Result<CellValue> {
    let source = source.into();
    move |row: &Row| {
        if max == 0.0 {
            return Err(TableError::Compute(format!(
                "cannot rank '{source}' against a maximum of zero"
            )));
        }

        let value = row.get_value(&source)?;
        let number = value.as_float().ok_or_else(|| {
            TableError::Compute(format!("'{value}' in column '{source}' is not numeric"))
        })?;

        let scaled = (number * 100.0 / max).round();
        if !(-I64_BOUND..I64_BOUND).contains(&scaled) {
            return Err(TableError::Compute(format!(
                "rank of '{value}' against {max} does not fit in an integer"
            )));
        }
        Ok(CellValue::Int(scaled as i64))
    }
}

/// 2^63: every float in `-I64_BOUND..I64_BOUND` converts to `i64` exactly.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl Table {
    /// Add (or refresh) a rank column computed from the maximum of `source`.
    pub fn with_rank_column(self, source: &str, name: &str) -> Result<Self> {
        let max = self
            .max_of(source)?
            .as_float()
            .ok_or_else(|| TableError::Compute(format!("maximum of '{source}' is not numeric")))?;

        self.with_computed_column(name, rank_against(source, max))
    }
}
