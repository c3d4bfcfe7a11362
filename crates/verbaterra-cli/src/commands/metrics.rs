//! `verbaterra metrics`: metric means for an existing dataset.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use verbaterra_analysis::compute_metric_means;
use verbaterra_analysis::metrics::MetricKind;

use super::lowercase_keys;
use crate::io;

#[derive(Args, Debug, Clone)]
pub struct MetricsArgs {
    /// Run directory, or a dataset CSV
    #[arg(long = "in", value_name = "DIR")]
    pub input: PathBuf,

    /// Metrics to compute
    #[arg(long, num_args = 1.., default_values = ["NLIS", "CRM"])]
    pub metrics: Vec<String>,

    /// Output file. Defaults to `<DIR>/metrics.json`
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &MetricsArgs) -> Result<PathBuf> {
    for name in &args.metrics {
        MetricKind::from_name(name)?;
    }

    let dataset = io::dataset_path(&args.input)?;
    let table = io::read_table(&dataset)?;
    let means = compute_metric_means(&table, &args.metrics)?;

    let output = match &args.out {
        Some(path) => path.clone(),
        None => default_output(&args.input),
    };
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        io::ensure_dir(parent)?;
    }
    io::write_json(&output, &lowercase_keys(&means))?;
    tracing::info!(metrics = means.len(), out = %output.display(), "metrics written");
    Ok(output)
}

fn default_output(input: &Path) -> PathBuf {
    let dir = if input.is_dir() {
        input
    } else {
        input.parent().unwrap_or(Path::new("."))
    };
    dir.join("metrics.json")
}
