//! Top-level error aggregating every subsystem error via `From` conversions.

use super::error_code::VerbaterraErrorCode;
use super::{ConfigError, ModelError, RegistryError, SchemaError, SimulationError, TableError};

/// Errors surfaced by the multi-stage pipeline and the CLI boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerbaterraError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

impl VerbaterraErrorCode for VerbaterraError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Schema(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Registry(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
            Self::Simulation(e) => e.error_code(),
            Self::Table(e) => e.error_code(),
        }
    }
}

pub type VerbaterraResult<T> = Result<T, VerbaterraError>;
