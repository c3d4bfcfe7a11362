//! `verbaterra train` and `verbaterra eval`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use verbaterra_analysis::models::{evaluate, Evaluation};
use verbaterra_analysis::{IclhfModel, ModelKind};
use verbaterra_core::events::{EventDispatcher, ModelPersistedEvent, ModelRestoredEvent};
use verbaterra_core::schema::validate_dataset;

use crate::events::TracingEventHandler;
use crate::io;

pub const TRAINING_SUMMARY_FILE: &str = "training_summary.txt";
pub const PREDICTIONS_FILE: &str = "predictions.csv";
pub const EVAL_FILE: &str = "eval.json";

#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    /// Registered model name
    #[arg(long, default_value = "iclhf")]
    pub model: String,

    /// Dataset CSV, or a run directory containing `dataset.csv`
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Output directory for the model and its summary
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct EvalArgs {
    /// Persisted model JSON
    #[arg(long)]
    pub model_path: PathBuf,

    /// Dataset CSV, or a run directory containing `dataset.csv`
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Output directory for predictions and scores
    #[arg(long)]
    pub out: PathBuf,
}

fn dispatcher() -> EventDispatcher {
    let mut dispatcher = EventDispatcher::default();
    dispatcher.register(Arc::new(TracingEventHandler));
    dispatcher
}

/// Fit `args.model` and persist it as `<out>/<model>.json`.
pub fn train(args: &TrainArgs) -> Result<PathBuf> {
    let kind = ModelKind::from_name(&args.model)?;
    let mut model = kind.create();
    let table = io::read_table(&io::dataset_path(&args.input)?)?;
    model.fit(&table)?;

    io::ensure_dir(&args.out)?;
    let model_path = args.out.join(format!("{}.json", kind.name()));
    fs::write(&model_path, model.to_json()?)
        .with_context(|| format!("failed to write '{}'", model_path.display()))?;
    let summary_path = args.out.join(TRAINING_SUMMARY_FILE);
    fs::write(&summary_path, format!("{}\n", model.summary()?))
        .with_context(|| format!("failed to write '{}'", summary_path.display()))?;

    dispatcher().emit_model_persisted(&ModelPersistedEvent {
        model: kind.name().to_string(),
        path: model_path.clone(),
    });
    Ok(model_path)
}

pub fn load_model(path: &Path) -> Result<IclhfModel> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read model '{}'", path.display()))?;
    Ok(IclhfModel::from_json(&json)?)
}

/// Score a persisted model and write `predictions.csv` plus `eval.json`.
pub fn eval(args: &EvalArgs) -> Result<Evaluation> {
    let table = io::read_table(&io::dataset_path(&args.input)?)?;
    validate_dataset(&table)?;

    let model = load_model(&args.model_path)?;
    dispatcher().emit_model_restored(&ModelRestoredEvent {
        model: ModelKind::Iclhf.name().to_string(),
        path: args.model_path.clone(),
    });

    let predictions = model.predict(&table)?;
    let evaluation = evaluate(&model, &table)?;

    io::ensure_dir(&args.out)?;
    let mut combined = table.clone();
    for column in predictions.columns() {
        combined.set_column(column.name.clone(), column.data.clone())?;
    }
    io::write_table(&args.out.join(PREDICTIONS_FILE), &combined)?;
    io::write_json(&args.out.join(EVAL_FILE), &evaluation)?;
    Ok(evaluation)
}
