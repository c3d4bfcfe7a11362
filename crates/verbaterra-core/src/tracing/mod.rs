//! Observability for VerbaTerra.
//! `tracing` crate with `EnvFilter`, per-crate log levels.

pub mod metrics;
pub mod setup;

pub use setup::init_tracing;
