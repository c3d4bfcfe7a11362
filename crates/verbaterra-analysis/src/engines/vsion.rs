//! vSION: independent Gaussian attributes with configurable affine targets.
//!
//! Draw order: ritual, trade, symbolism, hierarchy, noise.

use verbaterra_core::config::{config_map, ConfigMap, ResolvedConfig};
use verbaterra_core::constants::*;
use verbaterra_core::errors::SimulationError;
use verbaterra_core::Table;

use super::sampling::Sampler;

pub const ROW_KEY: &str = "population";

/// `(ritual, trade, symbolism, hierarchy, bias)` weights for lexical diversity.
pub const LEXICAL_WEIGHTS: [f64; 5] = [0.2, 0.3, 0.25, -0.1, 20.0];

/// `(ritual, trade, symbolism, hierarchy, bias)` weights for syntax complexity.
pub const SYNTAX_WEIGHTS: [f64; 5] = [0.2, 0.15, 0.15, 0.2, 15.0];

pub fn default_config() -> ConfigMap {
    let mut config = config_map([(ROW_KEY, 200i64)]);
    config.extend(config_map([
        ("ritual_mean", 50.0),
        ("ritual_std", 10.0),
        ("trade_mean", 50.0),
        ("trade_std", 15.0),
        ("symbolism_mean", 50.0),
        ("symbolism_std", 12.0),
        ("hierarchy_mean", 50.0),
        ("hierarchy_std", 18.0),
        ("noise_std", 5.0),
    ]));
    config.extend(config_map([
        ("lexical_weights", LEXICAL_WEIGHTS.to_vec()),
        ("syntax_weights", SYNTAX_WEIGHTS.to_vec()),
    ]));
    config
}

fn affine(weights: &[f64], base: [&[f64]; 4], noise: &[f64]) -> Vec<f64> {
    (0..noise.len())
        .map(|i| {
            weights[0] * base[0][i]
                + weights[1] * base[1][i]
                + weights[2] * base[2][i]
                + weights[3] * base[3][i]
                + noise[i]
                + weights[4]
        })
        .collect()
}

pub fn generate(config: &ResolvedConfig, sampler: &mut Sampler) -> Result<Table, SimulationError> {
    let n = config.rows();
    let lexical_weights = config.weights("lexical_weights", 5)?;
    let syntax_weights = config.weights("syntax_weights", 5)?;

    let ritual = sampler.normal(
        n,
        config.number("ritual_mean")?,
        config.non_negative("ritual_std")?,
    );
    let trade = sampler.normal(n, config.number("trade_mean")?, config.non_negative("trade_std")?);
    let symbolism = sampler.normal(
        n,
        config.number("symbolism_mean")?,
        config.non_negative("symbolism_std")?,
    );
    let hierarchy = sampler.normal(
        n,
        config.number("hierarchy_mean")?,
        config.non_negative("hierarchy_std")?,
    );
    let noise = sampler.normal(n, 0.0, config.non_negative("noise_std")?);

    let base = [&ritual[..], &trade[..], &symbolism[..], &hierarchy[..]];
    let lexical = affine(&lexical_weights, base, &noise);
    let syntax = affine(&syntax_weights, base, &noise);

    Ok(Table::from_columns([
        (RITUAL, ritual),
        (TRADE, trade),
        (SYMBOLISM, symbolism),
        (HIERARCHY, hierarchy),
        (LEXICAL_DIVERSITY, lexical),
        (SYNTAX_COMPLEXITY, syntax),
    ])?)
}
