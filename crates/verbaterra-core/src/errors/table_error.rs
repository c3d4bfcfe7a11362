//! Table construction errors.

use super::error_code::{self, VerbaterraErrorCode};

/// Errors that can occur while assembling or reshaping a table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("column '{column}' has {actual} rows, table has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),

    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}

impl VerbaterraErrorCode for TableError {
    fn error_code(&self) -> &'static str {
        error_code::TABLE_ERROR
    }
}
