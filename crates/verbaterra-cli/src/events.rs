//! Forwards pipeline lifecycle events to `tracing`.

use verbaterra_core::events::*;

/// Logs every lifecycle event at `info`, errors at `error`.
#[derive(Debug, Default)]
pub struct TracingEventHandler;

impl VerbaterraEventHandler for TracingEventHandler {
    fn on_simulation_started(&self, event: &SimulationStartedEvent) {
        tracing::info!(
            engine = %event.engine,
            rows = event.rows,
            seed = ?event.seed,
            "simulation started"
        );
    }

    fn on_simulation_completed(&self, event: &SimulationCompletedEvent) {
        tracing::info!(
            engine = %event.engine,
            rows = event.rows,
            columns = event.columns,
            simulation_duration_ms = event.duration_ms,
            "simulation completed"
        );
    }

    fn on_table_validated(&self, event: &TableValidatedEvent) {
        tracing::info!(rows = event.rows, columns = event.columns, "table validated");
    }

    fn on_metric_computed(&self, event: &MetricComputedEvent) {
        tracing::info!(
            metric = %event.metric,
            mean = event.mean,
            rows = event.rows,
            "metric computed"
        );
    }

    fn on_model_fitted(&self, event: &ModelFittedEvent) {
        tracing::info!(model = %event.model, rows = event.rows, "model fitted");
    }

    fn on_model_persisted(&self, event: &ModelPersistedEvent) {
        tracing::info!(model = %event.model, path = %event.path.display(), "model persisted");
    }

    fn on_model_restored(&self, event: &ModelRestoredEvent) {
        tracing::info!(model = %event.model, path = %event.path.display(), "model restored");
    }

    fn on_error(&self, event: &ErrorEvent) {
        tracing::error!(error_code = %event.error_code, "{}", event.message);
    }
}
