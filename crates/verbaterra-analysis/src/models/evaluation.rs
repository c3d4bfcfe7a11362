//! Model evaluation against observed targets.

use serde::{Deserialize, Serialize};
use verbaterra_core::constants::*;
use verbaterra_core::errors::ModelError;
use verbaterra_core::schema::validate_dataset;
use verbaterra_core::Table;

use super::iclhf::IclhfModel;
use crate::normalize::mean;

/// Mean squared error per target. NaN for an empty table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub mse_lexical: f64,
    pub mse_syntax: f64,
    pub rows: usize,
}

fn mse(observed: &[f64], predicted: &[f64]) -> f64 {
    let squared: Vec<f64> = observed
        .iter()
        .zip(predicted)
        .map(|(o, p)| (o - p).powi(2))
        .collect();
    mean(&squared)
}

/// Predict on `table` and score against its target columns.
pub fn evaluate(model: &IclhfModel, table: &Table) -> Result<Evaluation, ModelError> {
    validate_dataset(table)?;
    let predictions = model.predict(table)?;
    let evaluation = Evaluation {
        mse_lexical: mse(
            table.require_numeric(LEXICAL_DIVERSITY)?,
            predictions.require_numeric(LEXICAL_DIVERSITY_HAT)?,
        ),
        mse_syntax: mse(
            table.require_numeric(SYNTAX_COMPLEXITY)?,
            predictions.require_numeric(SYNTAX_COMPLEXITY_HAT)?,
        ),
        rows: table.row_count(),
    };
    tracing::debug!(
        mse_lexical = evaluation.mse_lexical,
        mse_syntax = evaluation.mse_syntax,
        rows = evaluation.rows,
        "model evaluated"
    );
    Ok(evaluation)
}
