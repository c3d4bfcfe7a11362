//! NPHRA: resonance engine driven by sinusoids over a synthetic time axis.
//!
//! `time = linspace(0, 4π, n)`. Draw order: oscillation jitter, ritual,
//! trade, symbolism, hierarchy. The targets carry no extra noise.

use std::f64::consts::PI;

use verbaterra_core::config::{config_map, ConfigMap, ResolvedConfig};
use verbaterra_core::constants::*;
use verbaterra_core::errors::SimulationError;
use verbaterra_core::Table;

use super::sampling::Sampler;
use crate::normalize::linspace;

pub const ROW_KEY: &str = "n";

pub const RESONANCE_WAVE: &str = "resonance_wave";
pub const NEURO_COHERENCE: &str = "neuro_coherence";

const OSCILLATION_JITTER_STD: f64 = 0.05;
const COHERENCE_AMPLITUDE: f64 = 0.4;
const RITUAL_BASE: f64 = 55.0;
const RITUAL_COHERENCE_GAIN: f64 = 12.0;
const RITUAL_NOISE_STD: f64 = 4.5;
const TRADE_OSCILLATION_GAIN: f64 = 8.0;
const TRADE_NOISE_STD: f64 = 3.5;
const SYMBOLISM_COHERENCE_GAIN: f64 = 15.0;
const SYMBOLISM_NOISE_STD: f64 = 4.0;
const HIERARCHY_WAVE_GAIN: f64 = 9.0;
const HIERARCHY_NOISE_STD: f64 = 5.0;
const NEURO_OSCILLATION_SHARE: f64 = 0.3;

/// `trade, symbolism, hierarchy, neuro_coherence` weights and bias.
const LEXICAL: (f64, f64, f64, f64, f64) = (0.28, 0.32, -0.1, 8.0, 19.0);
/// `ritual, hierarchy, neuro_coherence` weights and bias.
const SYNTAX: (f64, f64, f64, f64) = (0.22, 0.2, 6.0, 12.0);

pub fn default_config() -> ConfigMap {
    let mut config = config_map([(ROW_KEY, 160i64)]);
    config.extend(config_map([
        ("oscillation_scale", 0.35),
        ("resonance_bias", 0.5),
        ("trade_level", 46.0),
        ("symbolism_level", 60.0),
        ("hierarchy_level", 44.0),
    ]));
    config
}

pub fn generate(config: &ResolvedConfig, sampler: &mut Sampler) -> Result<Table, SimulationError> {
    let n = config.rows();
    let scale = config.number("oscillation_scale")?;
    let bias = config.number("resonance_bias")?;
    let trade_level = config.number("trade_level")?;
    let symbolism_level = config.number("symbolism_level")?;
    let hierarchy_level = config.number("hierarchy_level")?;

    let time = linspace(0.0, 4.0 * PI, n);

    let oscillation: Vec<f64> = sampler
        .normal(n, 0.0, OSCILLATION_JITTER_STD)
        .into_iter()
        .zip(&time)
        .map(|(eps, t)| t.sin() * scale + eps)
        .collect();
    let coherence: Vec<f64> = time
        .iter()
        .map(|t| (t / 2.0).cos() * COHERENCE_AMPLITUDE + bias)
        .collect();

    let ritual: Vec<f64> = sampler
        .normal(n, 0.0, RITUAL_NOISE_STD)
        .into_iter()
        .zip(&coherence)
        .map(|(eps, c)| RITUAL_BASE + RITUAL_COHERENCE_GAIN * c + eps)
        .collect();
    let trade: Vec<f64> = sampler
        .normal(n, 0.0, TRADE_NOISE_STD)
        .into_iter()
        .zip(&oscillation)
        .map(|(eps, o)| trade_level + TRADE_OSCILLATION_GAIN * o + eps)
        .collect();
    let symbolism: Vec<f64> = sampler
        .normal(n, 0.0, SYMBOLISM_NOISE_STD)
        .into_iter()
        .zip(&coherence)
        .map(|(eps, c)| symbolism_level + SYMBOLISM_COHERENCE_GAIN * c + eps)
        .collect();
    let hierarchy: Vec<f64> = sampler
        .normal(n, 0.0, HIERARCHY_NOISE_STD)
        .into_iter()
        .zip(&time)
        .map(|(eps, t)| hierarchy_level + HIERARCHY_WAVE_GAIN * (t / 3.0).cos() + eps)
        .collect();

    let neuro: Vec<f64> = coherence
        .iter()
        .zip(&oscillation)
        .map(|(c, o)| c + o * NEURO_OSCILLATION_SHARE)
        .collect();

    let lexical: Vec<f64> = (0..n)
        .map(|i| {
            LEXICAL.0 * trade[i] + LEXICAL.1 * symbolism[i] + LEXICAL.2 * hierarchy[i]
                + LEXICAL.4
                + neuro[i] * LEXICAL.3
        })
        .collect();
    let syntax: Vec<f64> = (0..n)
        .map(|i| SYNTAX.0 * ritual[i] + SYNTAX.1 * hierarchy[i] + neuro[i] * SYNTAX.2 + SYNTAX.3)
        .collect();

    Ok(Table::from_columns([
        (RITUAL, ritual),
        (TRADE, trade),
        (SYMBOLISM, symbolism),
        (HIERARCHY, hierarchy),
        (LEXICAL_DIVERSITY, lexical),
        (SYNTAX_COMPLEXITY, syntax),
        (RESONANCE_WAVE, oscillation),
        (NEURO_COHERENCE, neuro),
    ])?)
}
