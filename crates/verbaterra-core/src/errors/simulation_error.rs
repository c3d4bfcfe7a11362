//! Simulation engine errors.

use super::error_code::VerbaterraErrorCode;
use super::{ConfigError, SchemaError, TableError};

/// Errors that can occur while running a simulation engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

impl VerbaterraErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Schema(e) => e.error_code(),
            Self::Table(e) => e.error_code(),
        }
    }
}
