//! # verbaterra-core
//!
//! Foundation crate for the VerbaTerra toolkit.
//! Defines the observation table, schema validation, configuration
//! resolution, errors, events, tracing, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod schema;
pub mod table;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{ConfigMap, ConfigValue, ResolvedConfig};
pub use errors::{VerbaterraError, VerbaterraResult};
pub use schema::{Schema, SchemaField};
pub use table::{Column, ColumnData, Table};
