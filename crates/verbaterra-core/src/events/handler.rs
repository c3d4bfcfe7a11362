//! VerbaterraEventHandler trait, every method a no-op by default.

use super::types::*;

/// Trait for observing VerbaTerra run lifecycle events.
///
/// Handlers override only the events they care about. `Send + Sync` so a
/// dispatcher can be shared across threads.
pub trait VerbaterraEventHandler: Send + Sync {
    // ---- Simulation ----
    fn on_simulation_started(&self, _event: &SimulationStartedEvent) {}
    fn on_simulation_completed(&self, _event: &SimulationCompletedEvent) {}

    // ---- Validation & metrics ----
    fn on_table_validated(&self, _event: &TableValidatedEvent) {}
    fn on_metric_computed(&self, _event: &MetricComputedEvent) {}

    // ---- Models ----
    fn on_model_fitted(&self, _event: &ModelFittedEvent) {}
    fn on_model_persisted(&self, _event: &ModelPersistedEvent) {}
    fn on_model_restored(&self, _event: &ModelRestoredEvent) {}

    // ---- Errors ----
    fn on_error(&self, _event: &ErrorEvent) {}
}
