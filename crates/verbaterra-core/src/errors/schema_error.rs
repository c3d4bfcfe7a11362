//! Schema validation errors.

use super::error_code::{self, VerbaterraErrorCode};

/// Errors raised when a table does not satisfy a schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("column '{column}' must be numeric; received {actual}")]
    NonNumericColumn { column: String, actual: String },
}

impl SchemaError {
    /// Names of the offending columns, in schema order.
    pub fn columns(&self) -> Vec<&str> {
        match self {
            Self::MissingColumns { columns } => columns.iter().map(String::as_str).collect(),
            Self::NonNumericColumn { column, .. } => vec![column.as_str()],
        }
    }
}

impl VerbaterraErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        error_code::SCHEMA_ERROR
    }
}
