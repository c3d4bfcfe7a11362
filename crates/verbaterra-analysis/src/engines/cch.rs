//! CCH: cultural-diffusion engine.
//!
//! A Beta-distributed diffusion rate pushes trade and symbolism upward;
//! `collective_memory` scores how close ritual and hierarchy sit to their
//! population means.
//!
//! Draw order: ritual, hierarchy, diffusion, trade noise, symbolism noise,
//! shared target noise.

use verbaterra_core::config::{config_map, ConfigMap, ResolvedConfig};
use verbaterra_core::constants::*;
use verbaterra_core::errors::SimulationError;
use verbaterra_core::Table;

use super::sampling::Sampler;
use crate::normalize::{mean, population_std};

pub const ROW_KEY: &str = "n";

pub const COLLECTIVE_MEMORY: &str = "collective_memory";
pub const DIFFUSION_RATE: &str = "diffusion_rate";

const DIFFUSION_ALPHA: f64 = 2.5;
const DIFFUSION_BETA: f64 = 3.0;
const TRADE_DIFFUSION_GAIN: f64 = 120.0;
const TRADE_NOISE_STD: f64 = 6.0;
const SYMBOLISM_DIFFUSION_GAIN: f64 = 80.0;
const SYMBOLISM_NOISE_STD: f64 = 5.5;
const TARGET_NOISE_STD: f64 = 3.5;
const RITUAL_COHERENCE_SHARE: f64 = 0.6;
const HIERARCHY_BALANCE_SHARE: f64 = 0.4;
const STD_EPSILON: f64 = 1e-6;

/// `trade, symbolism, diffusion*100` weights and bias for lexical diversity.
const LEXICAL: (f64, f64, f64, f64) = (0.25, 0.35, 0.15, 16.0);
/// `ritual, hierarchy, diffusion*80` weights and bias for syntax complexity.
const SYNTAX: (f64, f64, f64, f64) = (0.3, 0.2, 0.1, 13.0);

pub fn default_config() -> ConfigMap {
    let mut config = config_map([(ROW_KEY, 180i64)]);
    config.extend(config_map([
        ("ritual_core", 60.0),
        ("ritual_variance", 8.5),
        ("hierarchy_center", 52.0),
        ("hierarchy_variance", 10.5),
        ("diffusion_rate", 0.18),
        ("trade_base", 42.0),
        ("symbolism_base", 57.0),
    ]));
    config
}

/// `1 - |x - mean| / (std + eps)` per element.
fn closeness(values: &[f64]) -> Vec<f64> {
    let m = mean(values);
    let s = population_std(values) + STD_EPSILON;
    values.iter().map(|v| 1.0 - (v - m).abs() / s).collect()
}

pub fn generate(config: &ResolvedConfig, sampler: &mut Sampler) -> Result<Table, SimulationError> {
    let n = config.rows();
    let rate = config.number("diffusion_rate")?;
    let trade_base = config.number("trade_base")?;
    let symbolism_base = config.number("symbolism_base")?;

    let ritual = sampler.normal(
        n,
        config.number("ritual_core")?,
        config.non_negative("ritual_variance")?,
    );
    let hierarchy = sampler.normal(
        n,
        config.number("hierarchy_center")?,
        config.non_negative("hierarchy_variance")?,
    );
    let diffusion: Vec<f64> = sampler
        .beta(n, DIFFUSION_ALPHA, DIFFUSION_BETA)?
        .into_iter()
        .map(|d| d * rate)
        .collect();
    let trade: Vec<f64> = sampler
        .normal(n, 0.0, TRADE_NOISE_STD)
        .into_iter()
        .zip(&diffusion)
        .map(|(eps, d)| trade_base + d * TRADE_DIFFUSION_GAIN + eps)
        .collect();
    let symbolism: Vec<f64> = sampler
        .normal(n, 0.0, SYMBOLISM_NOISE_STD)
        .into_iter()
        .zip(&diffusion)
        .map(|(eps, d)| symbolism_base + d * SYMBOLISM_DIFFUSION_GAIN + eps)
        .collect();

    let collective_memory: Vec<f64> = closeness(&ritual)
        .into_iter()
        .zip(closeness(&hierarchy))
        .map(|(r, h)| RITUAL_COHERENCE_SHARE * r + HIERARCHY_BALANCE_SHARE * h)
        .collect();

    let noise = sampler.normal(n, 0.0, TARGET_NOISE_STD);
    let lexical: Vec<f64> = (0..n)
        .map(|i| {
            LEXICAL.0 * trade[i]
                + LEXICAL.1 * symbolism[i]
                + LEXICAL.2 * diffusion[i] * 100.0
                + noise[i]
                + LEXICAL.3
        })
        .collect();
    let syntax: Vec<f64> = (0..n)
        .map(|i| {
            SYNTAX.0 * ritual[i]
                + SYNTAX.1 * hierarchy[i]
                + SYNTAX.2 * diffusion[i] * 80.0
                + noise[i]
                + SYNTAX.3
        })
        .collect();

    Ok(Table::from_columns([
        (RITUAL, ritual),
        (TRADE, trade),
        (SYMBOLISM, symbolism),
        (HIERARCHY, hierarchy),
        (LEXICAL_DIVERSITY, lexical),
        (SYNTAX_COMPLEXITY, syntax),
        (COLLECTIVE_MEMORY, collective_memory),
        (DIFFUSION_RATE, diffusion),
    ])?)
}
