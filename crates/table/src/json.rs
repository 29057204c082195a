use crate::error::{Result, TableError};
use crate::table::Table;

impl Table {
    /// Convert to a JSON array of records, keys in schema order
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        let rows: Vec<_> = self.rows().collect();
        serde_json::to_value(rows).map_err(|e| TableError::Serialize(e.to_string()))
    }

    /// Convert to a pretty-printed JSON string
    pub fn to_json_string(&self) -> Result<String> {
        let rows: Vec<_> = self.rows().collect();
        serde_json::to_string_pretty(&rows).map_err(|e| TableError::Serialize(e.to_string()))
    }
}
