//! Simulate → validate → score → fit, with lifecycle events.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use verbaterra_core::config::ConfigMap;
use verbaterra_core::errors::VerbaterraErrorCode;
use verbaterra_core::events::*;
use verbaterra_core::schema::validate_dataset;
use verbaterra_core::{Table, VerbaterraResult};

use crate::engines::{EngineKind, SimulationOutput};
use crate::metrics::MetricKind;
use crate::models::IclhfModel;
use crate::normalize::mean;

/// A table with per-row metric columns appended, plus their means.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTable {
    pub table: Table,
    pub means: BTreeMap<String, f64>,
}

/// Everything one `run` produced.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub simulation: SimulationOutput,
    pub scored: ScoredTable,
    pub model: IclhfModel,
}

/// Orchestrates a run and reports each stage to the registered handlers.
#[derive(Debug, Default)]
pub struct Pipeline {
    dispatcher: EventDispatcher,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dispatcher(dispatcher: EventDispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn register(&mut self, handler: Arc<dyn VerbaterraEventHandler>) {
        self.dispatcher.register(handler);
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    fn report<T>(&self, result: VerbaterraResult<T>) -> VerbaterraResult<T> {
        if let Err(err) = &result {
            self.dispatcher.emit_error(&ErrorEvent {
                message: err.to_string(),
                error_code: err.error_code().to_string(),
            });
        }
        result
    }

    pub fn simulate(
        &self,
        engine: EngineKind,
        overrides: &ConfigMap,
        seed: Option<u64>,
    ) -> VerbaterraResult<SimulationOutput> {
        let config = self.report(engine.resolve(overrides).map_err(Into::into))?;
        self.dispatcher.emit_simulation_started(&SimulationStartedEvent {
            engine: engine.name().to_string(),
            rows: config.rows(),
            seed,
        });

        let start = Instant::now();
        let output = self.report(engine.simulate_resolved(config, seed).map_err(Into::into))?;
        self.dispatcher.emit_simulation_completed(&SimulationCompletedEvent {
            engine: engine.name().to_string(),
            rows: output.table.row_count(),
            columns: output.table.column_count(),
            duration_ms: start.elapsed().as_millis() as u64,
        });
        Ok(output)
    }

    /// Validate `table`, then append `NLIS` and `CRM` columns.
    pub fn score(&self, table: &Table) -> VerbaterraResult<ScoredTable> {
        self.report(validate_dataset(table).map_err(Into::into))?;
        self.dispatcher.emit_table_validated(&TableValidatedEvent {
            rows: table.row_count(),
            columns: table.column_count(),
        });

        let mut scored = table.clone();
        let mut means = BTreeMap::new();
        for kind in [MetricKind::Nlis, MetricKind::Crm] {
            let scores = self.report(kind.compute(table).map_err(Into::into))?;
            let m = mean(&scores);
            self.dispatcher.emit_metric_computed(&MetricComputedEvent {
                metric: kind.name().to_string(),
                mean: m,
                rows: scores.len(),
            });
            means.insert(kind.name().to_string(), m);
            self.report(scored.set_column(kind.name(), scores).map_err(Into::into))?;
        }
        Ok(ScoredTable {
            table: scored,
            means,
        })
    }

    /// Fit a fresh ICLHF model on `table`.
    pub fn train(&self, table: &Table) -> VerbaterraResult<IclhfModel> {
        let mut model = IclhfModel::new();
        self.report(model.fit(table).map(|_| ()).map_err(Into::into))?;
        self.dispatcher.emit_model_fitted(&ModelFittedEvent {
            model: "iclhf".to_string(),
            rows: table.row_count(),
        });
        Ok(model)
    }

    pub fn run(
        &self,
        engine: EngineKind,
        overrides: &ConfigMap,
        seed: Option<u64>,
    ) -> VerbaterraResult<PipelineRun> {
        let simulation = self.simulate(engine, overrides, seed)?;
        let scored = self.score(&simulation.table)?;
        let model = self.train(&scored.table)?;
        Ok(PipelineRun {
            simulation,
            scored,
            model,
        })
    }
}
