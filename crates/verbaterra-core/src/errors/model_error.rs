//! Regression model errors.

use super::error_code::{self, VerbaterraErrorCode};
use super::{SchemaError, TableError};

/// Errors raised by model fitting, prediction, and persistence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("model must be fit before calling predict or summary")]
    NotFitted,

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("malformed persisted model: {reason}")]
    MalformedRecord { reason: String },

    #[error("cannot fit a regression on {rows} rows")]
    InsufficientRows { rows: usize },

    #[error(transparent)]
    Table(#[from] TableError),
}

impl ModelError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }
}

impl VerbaterraErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFitted => error_code::NOT_FITTED,
            Self::Schema(e) => e.error_code(),
            Self::MalformedRecord { .. } => error_code::MALFORMED_MODEL,
            Self::InsufficientRows { .. } => error_code::MODEL_ERROR,
            Self::Table(e) => e.error_code(),
        }
    }
}
