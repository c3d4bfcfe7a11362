//! # verbaterra-cli
//!
//! Argument parsing and file artifacts for the `verbaterra` binary. Every
//! subcommand is a plain function over its parsed arguments so it can be
//! driven from tests without spawning a process.

pub mod commands;
pub mod events;
pub mod io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::catalog::{self, HypothesesArgs};
use commands::metrics::{self, MetricsArgs};
use commands::model::{self, EvalArgs, TrainArgs};
use commands::sim::{self, SimArgs};

#[derive(Parser)]
#[command(name = "verbaterra")]
#[command(about = "VerbaTerra - synthetic sociolinguistic data, metrics, and models")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a simulation engine and export run artifacts
    Sim(SimArgs),

    /// Compute metric means for a run directory
    Metrics(MetricsArgs),

    /// Train a predictive model on a dataset
    Train(TrainArgs),

    /// Evaluate a persisted model on a dataset
    Eval(EvalArgs),

    /// List registered simulation engines
    Engines,

    /// Print the research hypothesis catalog
    Hypotheses(HypothesesArgs),
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Sim(args) => {
            let artifacts = sim::run(&args)?;
            println!("Run artifacts written to {}", artifacts.out_dir.display());
        }
        Commands::Metrics(args) => {
            let path = metrics::run(&args)?;
            println!("Metrics written to {}", path.display());
        }
        Commands::Train(args) => {
            let path = model::train(&args)?;
            println!("Model saved to {}", path.display());
        }
        Commands::Eval(args) => {
            let evaluation = model::eval(&args)?;
            println!("{}", serde_json::to_string_pretty(&evaluation)?);
            println!("Evaluation artifacts written to {}", args.out.display());
        }
        Commands::Engines => print!("{}", catalog::engines()),
        Commands::Hypotheses(args) => print!("{}", catalog::hypotheses(&args)?),
    }
    Ok(())
}
