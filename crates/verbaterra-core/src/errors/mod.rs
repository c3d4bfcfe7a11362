//! Error handling for VerbaTerra.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod model_error;
pub mod registry_error;
pub mod schema_error;
pub mod simulation_error;
pub mod table_error;
pub mod verbaterra_error;

pub use config_error::ConfigError;
pub use error_code::VerbaterraErrorCode;
pub use model_error::ModelError;
pub use registry_error::{RegistryError, RegistryKind};
pub use schema_error::SchemaError;
pub use simulation_error::SimulationError;
pub use table_error::TableError;
pub use verbaterra_error::{VerbaterraError, VerbaterraResult};
