use thiserror::Error;

/// Errors that can occur during table operations
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Schema mismatch on line {line}: expected {expected} cells, got {actual}")]
    SchemaMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Insufficient input: need a header and at least one data line, got {lines} line(s)")]
    InsufficientInput { lines: usize },

    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    #[error("Table has no rows")]
    EmptyTable,

    #[error("Type mismatch in column '{column}': row {row} holds non-numeric value '{found}'")]
    TypeMismatch {
        column: String,
        row: usize,
        found: String,
    },

    #[error("Duplicate column name: {name}")]
    DuplicateColumnName { name: String },

    #[error("Row {index} does not match the table schema")]
    InconsistentRow { index: usize },

    #[error("Row index out of bounds: {index} (table has {count} rows)")]
    RowIndexOutOfBounds { index: usize, count: usize },

    #[error("Compute error: {0}")]
    Compute(String),

    #[error("Serialize error: {0}")]
    Serialize(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl TableError {
    /// Create a column-not-found error.
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
