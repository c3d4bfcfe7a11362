//! Persisted model record.
//!
//! JSON shape:
//! `{"feature_columns": [...], "lexical": {"coef": [...], "intercept": x},
//!   "syntax": {"coef": [...], "intercept": y}}`

use serde::{Deserialize, Serialize};
use verbaterra_core::constants::FEATURE_COLUMNS;

use super::ols::LinearFit;

fn default_feature_columns() -> Vec<String> {
    FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect()
}

/// Serializable form of a trained ICLHF model.
///
/// The regression blocks are optional on input so that a record missing
/// either one is reported as malformed rather than as a generic parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    #[serde(default = "default_feature_columns")]
    pub feature_columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexical: Option<LinearFit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax: Option<LinearFit>,
}
