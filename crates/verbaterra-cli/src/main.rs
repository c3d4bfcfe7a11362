use anyhow::Result;
use clap::Parser;

use verbaterra_cli::Cli;
use verbaterra_core::tracing::init_tracing;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    verbaterra_cli::run(cli)
}
