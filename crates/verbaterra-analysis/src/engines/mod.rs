//! Simulation engines and the name-keyed engine registry.
//!
//! Every engine resolves its configuration against fixed defaults, draws
//! from a per-call seeded `Sampler`, and validates the resulting table
//! against the dataset schema before returning it.

pub mod cch;
pub mod nphra;
pub mod sampling;
pub mod vsion;

use std::fmt;
use std::time::Instant;

use verbaterra_core::config::{resolve, ConfigMap, ResolvedConfig};
use verbaterra_core::errors::{ConfigError, RegistryError, RegistryKind, SimulationError};
use verbaterra_core::schema::validate_dataset;
use verbaterra_core::tracing::metrics;
use verbaterra_core::Table;

use self::sampling::Sampler;

/// The closed set of registered engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    Vsion,
    Cch,
    Nphra,
}

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutput {
    pub engine: EngineKind,
    pub table: Table,
    pub config: ResolvedConfig,
    /// Seed the run actually used (drawn from OS entropy when none was given).
    pub seed: u64,
}

impl EngineKind {
    /// All engines, sorted by name.
    pub const ALL: [EngineKind; 3] = [EngineKind::Cch, EngineKind::Nphra, EngineKind::Vsion];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Vsion => "vsion",
            Self::Cch => "cch",
            Self::Nphra => "nphra",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Vsion => "Vectorial societal integration oscillation network (Gaussian baseline)",
            Self::Cch => "Cultural cohesion heuristic with Beta-distributed diffusion",
            Self::Nphra => "Neuro-phrasal resonance with sinusoidal drivers",
        }
    }

    /// The config key holding the row count.
    pub fn row_key(&self) -> &'static str {
        match self {
            Self::Vsion => vsion::ROW_KEY,
            Self::Cch => cch::ROW_KEY,
            Self::Nphra => nphra::ROW_KEY,
        }
    }

    /// A fresh copy of this engine's default parameters.
    pub fn default_config(&self) -> ConfigMap {
        match self {
            Self::Vsion => vsion::default_config(),
            Self::Cch => cch::default_config(),
            Self::Nphra => nphra::default_config(),
        }
    }

    /// Case-insensitive registry lookup.
    pub fn from_name(name: &str) -> Result<Self, RegistryError> {
        let wanted = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| RegistryError::unknown(RegistryKind::Engine, name, &available_engines()))
    }

    /// Merge `overrides` onto this engine's defaults.
    pub fn resolve(&self, overrides: &ConfigMap) -> Result<ResolvedConfig, ConfigError> {
        resolve(&self.default_config(), overrides, self.row_key())
    }

    /// Resolve `overrides` against the defaults and generate a table.
    pub fn simulate(
        &self,
        overrides: &ConfigMap,
        seed: Option<u64>,
    ) -> Result<SimulationOutput, SimulationError> {
        self.simulate_resolved(self.resolve(overrides)?, seed)
    }

    /// Generate a table from an already resolved configuration.
    pub fn simulate_resolved(
        &self,
        config: ResolvedConfig,
        seed: Option<u64>,
    ) -> Result<SimulationOutput, SimulationError> {
        let mut sampler = Sampler::new(seed);
        let span = tracing::debug_span!(
            "simulate",
            engine = self.name(),
            rows = config.rows(),
            seed = sampler.seed(),
            simulation_duration_ms = tracing::field::Empty
        );
        let _guard = span.enter();
        let start = Instant::now();

        let table = match self {
            Self::Vsion => vsion::generate(&config, &mut sampler)?,
            Self::Cch => cch::generate(&config, &mut sampler)?,
            Self::Nphra => nphra::generate(&config, &mut sampler)?,
        };
        validate_dataset(&table)?;

        span.record(metrics::SIMULATION_DURATION, start.elapsed().as_millis() as u64);
        tracing::debug!(columns = table.column_count(), "simulation complete");

        Ok(SimulationOutput {
            engine: *self,
            table,
            config,
            seed: sampler.seed(),
        })
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Registered engine names, sorted.
pub fn available_engines() -> Vec<&'static str> {
    EngineKind::ALL.iter().map(EngineKind::name).collect()
}

/// Look up `name` and run it.
pub fn run_engine(
    name: &str,
    overrides: &ConfigMap,
    seed: Option<u64>,
) -> Result<SimulationOutput, verbaterra_core::VerbaterraError> {
    let engine = EngineKind::from_name(name)?;
    Ok(engine.simulate(overrides, seed)?)
}
