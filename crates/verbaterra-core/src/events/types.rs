//! Event payload types.

use std::path::PathBuf;

/// Payload for `on_simulation_started`.
#[derive(Debug, Clone)]
pub struct SimulationStartedEvent {
    pub engine: String,
    pub rows: usize,
    pub seed: Option<u64>,
}

/// Payload for `on_simulation_completed`.
#[derive(Debug, Clone)]
pub struct SimulationCompletedEvent {
    pub engine: String,
    pub rows: usize,
    pub columns: usize,
    pub duration_ms: u64,
}

/// Payload for `on_table_validated`.
#[derive(Debug, Clone)]
pub struct TableValidatedEvent {
    pub rows: usize,
    pub columns: usize,
}

/// Payload for `on_metric_computed`.
#[derive(Debug, Clone)]
pub struct MetricComputedEvent {
    pub metric: String,
    pub mean: f64,
    pub rows: usize,
}

#[derive(Debug, Clone)]
pub struct ModelFittedEvent {
    pub model: String,
    pub rows: usize,
}

#[derive(Debug, Clone)]
pub struct ModelPersistedEvent {
    pub model: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ModelRestoredEvent {
    pub model: String,
    pub path: PathBuf,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
