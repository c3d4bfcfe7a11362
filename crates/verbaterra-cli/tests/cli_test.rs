//! End-to-end tests for the CLI commands, driven through their library entry points.

use std::fs;
use std::path::Path;

use clap::Parser;
use serde_json::Value;
use verbaterra_cli::commands::catalog::HypothesesArgs;
use verbaterra_cli::commands::metrics::{self, MetricsArgs};
use verbaterra_cli::commands::model::{self, EvalArgs, TrainArgs};
use verbaterra_cli::commands::sim::{self, SimArgs};
use verbaterra_cli::{Cli, Commands};

fn sim_args(out: &Path, engine: &str, seed: u64, sets: &[&str]) -> SimArgs {
    SimArgs {
        engine: engine.to_string(),
        config: None,
        seed: Some(seed),
        set: sets.iter().map(|s| s.to_string()).collect(),
        out: out.to_path_buf(),
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_sim_writes_every_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("run");
    let artifacts = sim::run(&sim_args(&out, "vsion", 7, &["population=40"])).unwrap();

    for path in [
        &artifacts.dataset,
        &artifacts.config,
        &artifacts.config_hash,
        &artifacts.metrics,
        &artifacts.metadata,
        &artifacts.readme,
    ] {
        assert!(path.is_file(), "missing {}", path.display());
    }

    let dataset = fs::read_to_string(&artifacts.dataset).unwrap();
    assert_eq!(dataset.lines().count(), 41);

    let metrics = read_json(&artifacts.metrics);
    let keys: Vec<&String> = metrics.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["crm", "nlis"]);

    let config = read_json(&artifacts.config);
    assert_eq!(config["population"], 40);

    let metadata = read_json(&artifacts.metadata);
    assert_eq!(metadata["engine"], "vsion");
    assert_eq!(metadata["seed"], 7);
    assert_eq!(metadata["rows"], 40);
    assert_eq!(metadata["config_hash"], artifacts.hash.as_str());

    assert_eq!(artifacts.hash.len(), 64);
    assert_eq!(
        fs::read_to_string(&artifacts.config_hash).unwrap().trim(),
        artifacts.hash
    );
    let readme = fs::read_to_string(&artifacts.readme).unwrap();
    assert!(readme.starts_with("# VerbaTerra Run"));
    assert!(readme.contains(&artifacts.hash));
}

#[test]
fn test_same_seed_same_run() {
    let dir = tempfile::tempdir().unwrap();
    let a = sim::run(&sim_args(&dir.path().join("a"), "cch", 11, &["n=25"])).unwrap();
    let b = sim::run(&sim_args(&dir.path().join("b"), "cch", 11, &["n=25"])).unwrap();
    let c = sim::run(&sim_args(&dir.path().join("c"), "cch", 12, &["n=25"])).unwrap();

    assert_eq!(a.hash, b.hash);
    assert_ne!(a.hash, c.hash);
    assert_eq!(
        fs::read_to_string(&a.dataset).unwrap(),
        fs::read_to_string(&b.dataset).unwrap()
    );
}

#[test]
fn test_sim_unknown_engine() {
    let dir = tempfile::tempdir().unwrap();
    let err = sim::run(&sim_args(dir.path(), "nope", 1, &[])).unwrap_err();
    assert!(err.to_string().contains("Unknown engine 'nope'"));
}

#[test]
fn test_sim_bad_assignment() {
    let dir = tempfile::tempdir().unwrap();
    assert!(sim::run(&sim_args(dir.path(), "vsion", 1, &["population"])).is_err());
}

#[test]
fn test_metrics_match_sim_output() {
    let dir = tempfile::tempdir().unwrap();
    let run_dir = dir.path().join("run");
    let artifacts = sim::run(&sim_args(&run_dir, "nphra", 3, &["n=30"])).unwrap();
    let from_sim = read_json(&artifacts.metrics);

    let recomputed_path = dir.path().join("recomputed.json");
    let written = metrics::run(&MetricsArgs {
        input: run_dir.clone(),
        metrics: vec!["nlis".into(), "CRM".into()],
        out: Some(recomputed_path.clone()),
    })
    .unwrap();
    assert_eq!(written, recomputed_path);

    let recomputed = read_json(&recomputed_path);
    for key in ["nlis", "crm"] {
        let a = from_sim[key].as_f64().unwrap();
        let b = recomputed[key].as_f64().unwrap();
        assert!((a - b).abs() < 1e-12, "{key}: {a} vs {b}");
    }
}

#[test]
fn test_metrics_default_output_and_subset() {
    let dir = tempfile::tempdir().unwrap();
    sim::run(&sim_args(dir.path(), "vsion", 5, &["population=20"])).unwrap();
    fs::remove_file(dir.path().join("metrics.json")).unwrap();

    let written = metrics::run(&MetricsArgs {
        input: dir.path().to_path_buf(),
        metrics: vec!["NLIS".into()],
        out: None,
    })
    .unwrap();
    assert_eq!(written, dir.path().join("metrics.json"));
    let keys: Vec<String> = read_json(&written).as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["nlis".to_string()]);
}

#[test]
fn test_metrics_unknown_name_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    sim::run(&sim_args(dir.path(), "vsion", 5, &["population=10"])).unwrap();
    let target = dir.path().join("other.json");
    let err = metrics::run(&MetricsArgs {
        input: dir.path().to_path_buf(),
        metrics: vec!["XYZ".into()],
        out: Some(target.clone()),
    })
    .unwrap_err();
    assert!(err.to_string().contains("Unknown metric 'XYZ'"));
    assert!(!target.exists());
}

#[test]
fn test_metrics_missing_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let err = metrics::run(&MetricsArgs {
        input: dir.path().to_path_buf(),
        metrics: vec!["NLIS".into()],
        out: None,
    })
    .unwrap_err();
    assert!(err.to_string().contains("Could not locate a dataset"));
}

#[test]
fn test_train_then_eval() {
    let dir = tempfile::tempdir().unwrap();
    let run_dir = dir.path().join("run");
    sim::run(&sim_args(&run_dir, "vsion", 21, &["population=60"])).unwrap();

    let model_dir = dir.path().join("model");
    let model_path = model::train(&TrainArgs {
        model: "ICLHF".into(),
        input: run_dir.clone(),
        out: model_dir.clone(),
    })
    .unwrap();
    assert_eq!(model_path, model_dir.join("iclhf.json"));
    let summary = fs::read_to_string(model_dir.join(model::TRAINING_SUMMARY_FILE)).unwrap();
    assert!(summary.starts_with("ICLHFModel\n"));

    let eval_dir = dir.path().join("eval");
    let evaluation = model::eval(&EvalArgs {
        model_path: model_path.clone(),
        input: run_dir.join("dataset.csv"),
        out: eval_dir.clone(),
    })
    .unwrap();
    assert_eq!(evaluation.rows, 60);
    assert!(evaluation.mse_lexical.is_finite() && evaluation.mse_lexical >= 0.0);
    assert!(evaluation.mse_syntax.is_finite() && evaluation.mse_syntax >= 0.0);

    let scores = read_json(&eval_dir.join(model::EVAL_FILE));
    assert!(scores["mse_lexical"].is_number());
    assert!(scores["mse_syntax"].is_number());

    let predictions = fs::read_to_string(eval_dir.join(model::PREDICTIONS_FILE)).unwrap();
    let header = predictions.lines().next().unwrap();
    assert!(header.ends_with("lexical_diversity_hat,syntax_complexity_hat"));
    assert_eq!(predictions.lines().count(), 61);

    // Re-evaluating the predictions file overwrites the hat columns in place.
    let again = model::eval(&EvalArgs {
        model_path,
        input: eval_dir.join(model::PREDICTIONS_FILE),
        out: dir.path().join("eval2"),
    })
    .unwrap();
    assert_eq!(again, evaluation);
}

#[test]
fn test_train_unknown_model() {
    let dir = tempfile::tempdir().unwrap();
    sim::run(&sim_args(dir.path(), "vsion", 1, &["population=10"])).unwrap();
    let err = model::train(&TrainArgs {
        model: "forest".into(),
        input: dir.path().to_path_buf(),
        out: dir.path().join("m"),
    })
    .unwrap_err();
    assert!(err.to_string().contains("Unknown model 'forest'"));
}

#[test]
fn test_eval_rejects_text_column() {
    let dir = tempfile::tempdir().unwrap();
    sim::run(&sim_args(dir.path(), "vsion", 2, &["population=15"])).unwrap();
    let model_path = model::train(&TrainArgs {
        model: "iclhf".into(),
        input: dir.path().to_path_buf(),
        out: dir.path().join("m"),
    })
    .unwrap();

    let csv = "ritual,trade,symbolism,hierarchy,lexical_diversity,syntax_complexity\n\
               0.1,0.2,high,0.4,0.5,0.6\n";
    let bad = dir.path().join("bad.csv");
    fs::write(&bad, csv).unwrap();
    let err = model::eval(&EvalArgs {
        model_path,
        input: bad,
        out: dir.path().join("e"),
    })
    .unwrap_err();
    assert!(err.to_string().contains("symbolism"));
}

#[test]
fn test_eval_malformed_model() {
    let dir = tempfile::tempdir().unwrap();
    sim::run(&sim_args(dir.path(), "vsion", 2, &["population=5"])).unwrap();
    let model_path = dir.path().join("broken.json");
    fs::write(&model_path, r#"{"feature_columns": ["ritual"]}"#).unwrap();
    let err = model::eval(&EvalArgs {
        model_path,
        input: dir.path().to_path_buf(),
        out: dir.path().join("e"),
    })
    .unwrap_err();
    assert!(err.to_string().contains("malformed persisted model"));
}

#[test]
fn test_argument_parsing() {
    let cli = Cli::try_parse_from([
        "verbaterra", "sim", "--engine", "cch", "--seed", "9", "--set", "n=10", "--set",
        "alpha=2.5", "--out", "runs/x",
    ])
    .unwrap();
    match cli.command {
        Commands::Sim(args) => {
            assert_eq!(args.engine, "cch");
            assert_eq!(args.seed, Some(9));
            assert_eq!(args.set, vec!["n=10", "alpha=2.5"]);
        }
        _ => panic!("expected sim"),
    }

    let cli = Cli::try_parse_from(["verbaterra", "metrics", "--in", "runs/x"]).unwrap();
    match cli.command {
        Commands::Metrics(args) => {
            assert_eq!(args.metrics, vec!["NLIS", "CRM"]);
            assert!(args.out.is_none());
        }
        _ => panic!("expected metrics"),
    }

    assert!(Cli::try_parse_from(["verbaterra", "eval", "--in", "x", "--out", "y"]).is_err());
}

#[test]
fn test_hypotheses_listing() {
    let all = verbaterra_cli::commands::catalog::hypotheses(&HypothesesArgs::default()).unwrap();
    assert_eq!(all.lines().count(), 8);
}
