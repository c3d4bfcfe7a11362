//! `verbaterra sim`: simulate, score, and write a self-describing run directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::Args;
use serde_json::json;
use verbaterra_analysis::engines::SimulationOutput;
use verbaterra_analysis::{EngineKind, Pipeline};
use verbaterra_core::config::{collect_overrides, env_overrides};

use super::lowercase_keys;
use crate::events::TracingEventHandler;
use crate::io::{self, DATASET_FILE};

pub const CONFIG_FILE: &str = "config.json";
pub const CONFIG_HASH_FILE: &str = "config_hash";
pub const METRICS_FILE: &str = "metrics.json";
pub const METADATA_FILE: &str = "metadata.json";
pub const README_FILE: &str = "README_run.md";

#[derive(Args, Debug, Clone)]
pub struct SimArgs {
    /// Engine to run (cch, nphra, vsion)
    #[arg(short, long, default_value = "vsion")]
    pub engine: String,

    /// Override file (YAML, TOML, or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Random seed; drawn from OS entropy when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Parameter override, e.g. `--set population=500` (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Output directory for run artifacts
    #[arg(short, long)]
    pub out: PathBuf,
}

/// Paths of everything one `sim` call wrote.
#[derive(Debug, Clone)]
pub struct RunArtifacts {
    pub out_dir: PathBuf,
    pub dataset: PathBuf,
    pub config: PathBuf,
    pub config_hash: PathBuf,
    pub metrics: PathBuf,
    pub metadata: PathBuf,
    pub readme: PathBuf,
    pub hash: String,
}

pub fn run(args: &SimArgs) -> Result<RunArtifacts> {
    let engine = EngineKind::from_name(&args.engine)?;
    let overrides = collect_overrides(args.config.as_deref(), env_overrides(), &args.set)?;

    let mut pipeline = Pipeline::new();
    pipeline.register(Arc::new(TracingEventHandler));
    let simulation = pipeline.simulate(engine, &overrides, args.seed)?;
    let scored = pipeline.score(&simulation.table)?;
    let metrics = lowercase_keys(&scored.means);

    io::ensure_dir(&args.out)?;
    let out = args.out.as_path();
    let hash = config_hash(&simulation)?;

    let artifacts = RunArtifacts {
        out_dir: out.to_path_buf(),
        dataset: out.join(DATASET_FILE),
        config: out.join(CONFIG_FILE),
        config_hash: out.join(CONFIG_HASH_FILE),
        metrics: out.join(METRICS_FILE),
        metadata: out.join(METADATA_FILE),
        readme: out.join(README_FILE),
        hash,
    };

    io::write_table(&artifacts.dataset, &simulation.table)?;
    io::write_json(&artifacts.config, &simulation.config)?;
    fs::write(&artifacts.config_hash, format!("{}\n", artifacts.hash))
        .with_context(|| format!("failed to write '{}'", artifacts.config_hash.display()))?;
    io::write_json(&artifacts.metrics, &metrics)?;

    let metadata = json!({
        "engine": simulation.engine.name(),
        "config": simulation.config,
        "seed": simulation.seed,
        "seed_requested": args.seed,
        "config_hash": artifacts.hash,
        "rows": simulation.table.row_count(),
        "columns": simulation.table.column_names(),
        "artifacts": {
            "dataset": DATASET_FILE,
            "config": CONFIG_FILE,
            "config_hash": CONFIG_HASH_FILE,
            "metrics": METRICS_FILE,
            "readme": README_FILE,
        },
    });
    io::write_json(&artifacts.metadata, &metadata)?;
    fs::write(&artifacts.readme, readme(&simulation, &artifacts.hash, &scored.means))
        .with_context(|| format!("failed to write '{}'", artifacts.readme.display()))?;

    tracing::info!(
        engine = simulation.engine.name(),
        rows = simulation.table.row_count(),
        seed = simulation.seed,
        out = %out.display(),
        "run artifacts written"
    );
    Ok(artifacts)
}

/// blake3 over the compact, key-sorted JSON of `{config, seed}`.
pub fn config_hash(simulation: &SimulationOutput) -> Result<String> {
    let payload = json!({ "config": simulation.config, "seed": simulation.seed });
    let canonical = serde_json::to_string(&payload)?;
    Ok(blake3::hash(canonical.as_bytes()).to_hex().to_string())
}

fn readme(
    simulation: &SimulationOutput,
    hash: &str,
    means: &BTreeMap<String, f64>,
) -> String {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let metric_lines: Vec<String> = means
        .iter()
        .map(|(name, value)| format!("- **{name}**: {value:.4}"))
        .collect();
    format!(
        "# VerbaTerra Run\n\n\
         - **Timestamp (UTC):** {timestamp}\n\
         - **Engine:** {engine}\n\
         - **Seed:** {seed}\n\
         - **Rows:** {rows}\n\
         - **Config hash:** {hash}\n\n\
         ## Metrics\n\
         {metrics}\n\n\
         ## Artifacts\n\
         - `{DATASET_FILE}`\n\
         - `{CONFIG_FILE}`\n\
         - `{CONFIG_HASH_FILE}`\n\
         - `{METRICS_FILE}`\n\
         - `{METADATA_FILE}`\n",
        engine = simulation.engine.name(),
        seed = simulation.seed,
        rows = simulation.table.row_count(),
        metrics = metric_lines.join("\n"),
    )
}

