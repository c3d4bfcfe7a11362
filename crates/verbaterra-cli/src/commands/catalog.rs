//! `verbaterra engines` and `verbaterra hypotheses`.

use std::fmt::Write;

use anyhow::{anyhow, Result};
use clap::Args;
use verbaterra_analysis::hypotheses::{all_hypotheses, catalog, Theme};
use verbaterra_analysis::EngineKind;

#[derive(Args, Debug, Clone, Default)]
pub struct HypothesesArgs {
    /// Restrict to one theme (name or two-letter code)
    #[arg(long)]
    pub theme: Option<String>,
}

/// One line per engine: name, row-count key, description.
pub fn engines() -> String {
    let mut out = String::new();
    for kind in EngineKind::ALL {
        let _ = writeln!(
            out,
            "{:<6} rows={:<10} {}",
            kind.name(),
            kind.row_key(),
            kind.description()
        );
    }
    out
}

pub fn hypotheses(args: &HypothesesArgs) -> Result<String> {
    let entries = match &args.theme {
        Some(name) => {
            let theme = Theme::from_name(name).ok_or_else(|| {
                let known: Vec<&str> = Theme::ALL.iter().map(Theme::name).collect();
                anyhow!("Unknown theme '{name}'. Available: {}", known.join(", "))
            })?;
            catalog(theme)
        }
        None => all_hypotheses().to_vec(),
    };

    let mut out = String::new();
    for h in &entries {
        let _ = writeln!(out, "{} [{}] {}", h.identifier, h.theme, h.statement);
    }
    Ok(out)
}
