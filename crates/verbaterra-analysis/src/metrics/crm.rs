//! CRM: Cultural Resilience Metric.
//!
//! Row order matters: the ritual stability term compares each row against
//! a trailing rolling mean.

use serde::{Deserialize, Serialize};
use verbaterra_core::constants::*;
use verbaterra_core::errors::SchemaError;
use verbaterra_core::schema::validate_dataset;
use verbaterra_core::Table;

use crate::normalize::{mean, min_max_normalize, rolling_mean};

/// CRM blend weights. Window 0 is treated as 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrmConfig {
    pub trade_symbolism_weight: f64,
    pub trade_weight: f64,
    pub symbolism_weight: f64,
    pub hierarchy_penalty_weight: f64,
    pub ritual_stability_weight: f64,
    pub stability_window: usize,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            trade_symbolism_weight: 0.6,
            trade_weight: 0.5,
            symbolism_weight: 0.5,
            hierarchy_penalty_weight: 0.2,
            ritual_stability_weight: 0.2,
            stability_window: 3,
        }
    }
}

/// `1 - normalize(deviations)`.
fn closeness_score(deviations: &[f64]) -> Vec<f64> {
    min_max_normalize(deviations)
        .into_iter()
        .map(|v| 1.0 - v)
        .collect()
}

/// CRM with the default weights.
pub fn compute_crm(table: &Table) -> Result<Vec<f64>, SchemaError> {
    compute_crm_with(table, &CrmConfig::default())
}

/// CRM with caller-supplied weights, clipped to [0, 1].
pub fn compute_crm_with(table: &Table, config: &CrmConfig) -> Result<Vec<f64>, SchemaError> {
    validate_dataset(table)?;
    let trade = min_max_normalize(table.require_numeric(TRADE)?);
    let symbolism = min_max_normalize(table.require_numeric(SYMBOLISM)?);
    let hierarchy = table.require_numeric(HIERARCHY)?;
    let ritual = table.require_numeric(RITUAL)?;

    let h_mean = mean(hierarchy);
    let h_dev: Vec<f64> = hierarchy.iter().map(|h| (h - h_mean).abs()).collect();
    let hierarchy_penalty = closeness_score(&h_dev);

    let rolling = rolling_mean(ritual, config.stability_window);
    let r_dev: Vec<f64> = ritual.iter().zip(&rolling).map(|(r, m)| (r - m).abs()).collect();
    let ritual_stability = closeness_score(&r_dev);

    Ok((0..table.row_count())
        .map(|i| {
            let trade_symbolism =
                config.trade_weight * trade[i] + config.symbolism_weight * symbolism[i];
            let score = config.trade_symbolism_weight * trade_symbolism
                + config.hierarchy_penalty_weight * hierarchy_penalty[i]
                + config.ritual_stability_weight * ritual_stability[i];
            score.clamp(0.0, 1.0)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(ritual: Vec<f64>) -> Table {
        let n = ritual.len();
        let ramp: Vec<f64> = (0..n).map(|i| i as f64).collect();
        Table::from_columns([
            (RITUAL, ritual),
            (TRADE, ramp.clone()),
            (SYMBOLISM, ramp.clone()),
            (HIERARCHY, ramp.clone()),
            (LEXICAL_DIVERSITY, ramp.clone()),
            (SYNTAX_COMPLEXITY, ramp),
        ])
        .unwrap()
    }

    #[test]
    fn test_bounds_and_length() {
        let scores = compute_crm(&table(vec![3.0, 9.0, 1.0, 4.0, 7.0])).unwrap();
        assert_eq!(scores.len(), 5);
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn test_constant_ritual_full_stability() {
        // trade/symbolism ramps 0..1, hierarchy ramp 0..2 around mean 1.
        let scores = compute_crm(&table(vec![5.0, 5.0, 5.0])).unwrap();
        let expected = [0.0 + 0.2 * 0.0 + 0.2, 0.6 * 0.5 + 0.2 * 1.0 + 0.2, 0.6 + 0.0 + 0.2];
        for (s, e) in scores.iter().zip(expected) {
            assert!((s - e).abs() < 1e-12, "{s} vs {e}");
        }
    }

    #[test]
    fn test_large_weights_clipped() {
        let config = CrmConfig {
            trade_symbolism_weight: 5.0,
            ..CrmConfig::default()
        };
        let scores = compute_crm_with(&table(vec![1.0, 2.0, 3.0]), &config).unwrap();
        assert_eq!(scores[2], 1.0);
    }

    #[test]
    fn test_missing_ritual_only_affects_its_row() {
        let ritual = vec![1.0, f64::NAN, 3.0, 5.0, 2.0, 8.0, 1.0, 4.0];
        let scores = compute_crm(&table(ritual)).unwrap();
        let expected = [
            0.2,
            f64::NAN,
            0.438095238095238,
            0.590476190476190,
            0.653968253968254,
            0.561904761904762,
            0.603174603174603,
            0.777777777777778,
        ];
        assert!(scores[1].is_nan());
        for (i, (s, e)) in scores.iter().zip(expected).enumerate() {
            if i != 1 {
                assert!((s - e).abs() < 1e-9, "row {i}: {s} vs {e}");
            }
        }
    }

    #[test]
    fn test_window_zero_treated_as_one() {
        let config = CrmConfig {
            stability_window: 0,
            ..CrmConfig::default()
        };
        let one = CrmConfig {
            stability_window: 1,
            ..CrmConfig::default()
        };
        let t = table(vec![4.0, 1.0, 8.0]);
        assert_eq!(compute_crm_with(&t, &config).unwrap(), compute_crm_with(&t, &one).unwrap());
    }
}
