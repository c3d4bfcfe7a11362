//! Composite per-row metrics and the metric registry.

pub mod crm;
pub mod nlis;

use std::collections::BTreeMap;
use std::fmt;

use verbaterra_core::errors::{RegistryError, RegistryKind, SchemaError};
use verbaterra_core::{Table, VerbaterraResult};

pub use crm::{compute_crm, compute_crm_with, CrmConfig};
pub use nlis::{compute_nlis, compute_nlis_with, NlisConfig};

use crate::normalize::mean;

/// The closed set of registered metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricKind {
    Nlis,
    Crm,
}

impl MetricKind {
    pub const ALL: [MetricKind; 2] = [MetricKind::Crm, MetricKind::Nlis];

    /// Upper-case conventional name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nlis => "NLIS",
            Self::Crm => "CRM",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Nlis => "Neuro-linguistic integration score",
            Self::Crm => "Cultural resilience metric, clipped to [0, 1]",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, RegistryError> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RegistryError::unknown(RegistryKind::Metric, name, &available_metrics()))
    }

    /// Per-row scores with default weights.
    pub fn compute(&self, table: &Table) -> Result<Vec<f64>, SchemaError> {
        match self {
            Self::Nlis => compute_nlis(table),
            Self::Crm => compute_crm(table),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn available_metrics() -> Vec<&'static str> {
    MetricKind::ALL.iter().map(MetricKind::name).collect()
}

/// Mean score per requested metric, keyed by upper-case name.
///
/// Every name is looked up before any metric runs. The mean of an empty
/// table is NaN.
pub fn compute_metric_means<S: AsRef<str>>(
    table: &Table,
    names: &[S],
) -> VerbaterraResult<BTreeMap<String, f64>> {
    let kinds = names
        .iter()
        .map(|n| MetricKind::from_name(n.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut means = BTreeMap::new();
    for kind in kinds {
        let scores = kind.compute(table)?;
        let m = mean(&scores);
        tracing::debug!(metric = kind.name(), mean = m, rows = scores.len(), "metric computed");
        means.insert(kind.name().to_string(), m);
    }
    Ok(means)
}
