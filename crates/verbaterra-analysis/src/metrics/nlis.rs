//! NLIS: Neuro-Linguistic Integration Score.

use serde::{Deserialize, Serialize};
use verbaterra_core::constants::*;
use verbaterra_core::errors::SchemaError;
use verbaterra_core::schema::validate_dataset;
use verbaterra_core::Table;

use crate::normalize::min_max_normalize;

/// NLIS blend weights.
///
/// The score is `lexical_weight * linguistic + cultural_weight * cultural`.
/// Weights are not required to sum to 1; the output stays in [0, 1] only
/// when they do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NlisConfig {
    pub lexical_weight: f64,
    pub cultural_weight: f64,
    pub lexical_diversity_weight: f64,
    pub syntax_complexity_weight: f64,
    pub ritual_weight: f64,
    pub trade_weight: f64,
    pub symbolism_weight: f64,
    pub hierarchy_weight: f64,
}

impl Default for NlisConfig {
    fn default() -> Self {
        Self {
            lexical_weight: 0.7,
            cultural_weight: 0.3,
            lexical_diversity_weight: 0.6,
            syntax_complexity_weight: 0.4,
            ritual_weight: 0.25,
            trade_weight: 0.25,
            symbolism_weight: 0.25,
            hierarchy_weight: 0.25,
        }
    }
}

impl NlisConfig {
    fn cultural_weights(&self) -> [(f64, &'static str); 4] {
        [
            (self.ritual_weight, RITUAL),
            (self.trade_weight, TRADE),
            (self.symbolism_weight, SYMBOLISM),
            (self.hierarchy_weight, HIERARCHY),
        ]
    }
}

/// Weighted sum of normalized columns.
fn blend(table: &Table, parts: &[(f64, &str)]) -> Result<Vec<f64>, SchemaError> {
    let mut total = vec![0.0; table.row_count()];
    for (weight, column) in parts {
        let normalized = min_max_normalize(table.require_numeric(column)?);
        for (acc, v) in total.iter_mut().zip(normalized) {
            *acc += weight * v;
        }
    }
    Ok(total)
}

/// NLIS with the default weights.
pub fn compute_nlis(table: &Table) -> Result<Vec<f64>, SchemaError> {
    compute_nlis_with(table, &NlisConfig::default())
}

/// NLIS with caller-supplied weights.
pub fn compute_nlis_with(table: &Table, config: &NlisConfig) -> Result<Vec<f64>, SchemaError> {
    validate_dataset(table)?;

    let linguistic = blend(
        table,
        &[
            (config.lexical_diversity_weight, LEXICAL_DIVERSITY),
            (config.syntax_complexity_weight, SYNTAX_COMPLEXITY),
        ],
    )?;
    let cultural = blend(table, &config.cultural_weights())?;

    Ok(linguistic
        .into_iter()
        .zip(cultural)
        .map(|(l, c)| config.lexical_weight * l + config.cultural_weight * c)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[[f64; 6]]) -> Table {
        Table::from_columns(
            MANDATORY_COLUMNS
                .iter()
                .enumerate()
                .map(|(j, name)| (*name, rows.iter().map(|r| r[j]).collect::<Vec<f64>>())),
        )
        .unwrap()
    }

    #[test]
    fn test_extremes_score_zero_and_one() {
        let t = table(&[[0.0; 6], [1.0; 6], [0.5; 6]]);
        let scores = compute_nlis(&t).unwrap();
        assert!((scores[0] - 0.0).abs() < 1e-12);
        assert!((scores[1] - 1.0).abs() < 1e-12);
        assert!((scores[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_constant_table_scores_zero() {
        let t = table(&[[5.0; 6], [5.0; 6]]);
        assert_eq!(compute_nlis(&t).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_custom_weights_unbounded() {
        let t = table(&[[0.0; 6], [1.0; 6]]);
        let config = NlisConfig {
            lexical_weight: 2.0,
            cultural_weight: 1.0,
            ..NlisConfig::default()
        };
        let scores = compute_nlis_with(&t, &config).unwrap();
        assert!((scores[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_config_partial_deserialize() {
        let config: NlisConfig = serde_json::from_str(r#"{"lexical_weight": 0.5}"#).unwrap();
        assert_eq!(config.lexical_weight, 0.5);
        assert_eq!(config.cultural_weight, 0.3);
    }

    #[test]
    fn test_missing_columns_reraised() {
        let t = Table::from_columns([(RITUAL, vec![1.0])]).unwrap();
        let err = compute_nlis(&t).unwrap_err();
        assert!(err.columns().contains(&TRADE));
    }
}
