//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::VerbaterraEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// With no handlers registered, `emit` iterates over an empty Vec.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn VerbaterraEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn VerbaterraEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Deliver to every handler. A panicking handler is reported and skipped;
    /// later handlers still receive the event.
    fn emit<F: Fn(&dyn VerbaterraEventHandler)>(&self, f: F) {
        for (index, handler) in self.handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(handler = index, "event handler panicked");
            }
        }
    }

    // ---- Simulation ----
    pub fn emit_simulation_started(&self, event: &SimulationStartedEvent) {
        self.emit(|h| h.on_simulation_started(event));
    }

    pub fn emit_simulation_completed(&self, event: &SimulationCompletedEvent) {
        self.emit(|h| h.on_simulation_completed(event));
    }

    // ---- Validation & metrics ----
    pub fn emit_table_validated(&self, event: &TableValidatedEvent) {
        self.emit(|h| h.on_table_validated(event));
    }

    pub fn emit_metric_computed(&self, event: &MetricComputedEvent) {
        self.emit(|h| h.on_metric_computed(event));
    }

    // ---- Models ----
    pub fn emit_model_fitted(&self, event: &ModelFittedEvent) {
        self.emit(|h| h.on_model_fitted(event));
    }

    pub fn emit_model_persisted(&self, event: &ModelPersistedEvent) {
        self.emit(|h| h.on_model_persisted(event));
    }

    pub fn emit_model_restored(&self, event: &ModelRestoredEvent) {
        self.emit(|h| h.on_model_restored(event));
    }

    // ---- Errors ----
    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
