//! Structured span field names shared across VerbaTerra crates.
//!
//! Consistent names keep log queries uniform between the engines,
//! metrics, and model code.

/// Engine registry key of the running simulation.
pub const ENGINE: &str = "engine";

/// Rows produced or consumed by a step.
pub const ROWS: &str = "rows";

/// RNG seed, when one was supplied.
pub const SEED: &str = "seed";

/// Metric registry key.
pub const METRIC: &str = "metric";

/// Model registry key.
pub const MODEL: &str = "model";

/// Simulation wall time in milliseconds.
pub const SIMULATION_DURATION: &str = "simulation_duration_ms";

/// Model fit wall time in milliseconds.
pub const FIT_DURATION: &str = "fit_duration_ms";

/// Mean squared error of the lexical-diversity predictions.
pub const MSE_LEXICAL: &str = "mse_lexical";

/// Mean squared error of the syntax-complexity predictions.
pub const MSE_SYNTAX: &str = "mse_syntax";
