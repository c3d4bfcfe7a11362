//! ICLHF: Inter-Cultural Linguistic Harmony Forecasting.
//!
//! Two independent OLS regressions over the same feature columns, one for
//! lexical diversity and one for syntax complexity.

use std::time::Instant;

use verbaterra_core::constants::*;
use verbaterra_core::errors::ModelError;
use verbaterra_core::schema::{ensure_columns, Schema};
use verbaterra_core::tracing::metrics;
use verbaterra_core::Table;

use super::ols::LinearFit;
use super::record::ModelRecord;

/// Fitted state. Both regressions are populated together or not at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModelState {
    #[default]
    Untrained,
    Trained { lexical: LinearFit, syntax: LinearFit },
}

#[derive(Debug, Clone, PartialEq)]
pub struct IclhfModel {
    feature_columns: Vec<String>,
    state: ModelState,
}

impl Default for IclhfModel {
    fn default() -> Self {
        Self::new()
    }
}

impl IclhfModel {
    /// An untrained model over the canonical four features.
    pub fn new() -> Self {
        Self::with_feature_columns(FEATURE_COLUMNS)
    }

    /// An untrained model over a custom feature order.
    pub fn with_feature_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            feature_columns: columns.into_iter().map(Into::into).collect(),
            state: ModelState::Untrained,
        }
    }

    pub fn feature_columns(&self) -> &[String] {
        &self.feature_columns
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }

    pub fn is_fitted(&self) -> bool {
        matches!(self.state, ModelState::Trained { .. })
    }

    fn trained(&self) -> Result<(&LinearFit, &LinearFit), ModelError> {
        match &self.state {
            ModelState::Trained { lexical, syntax } => Ok((lexical, syntax)),
            ModelState::Untrained => Err(ModelError::NotFitted),
        }
    }

    fn feature_slices<'t>(&self, table: &'t Table) -> Result<Vec<&'t [f64]>, ModelError> {
        ensure_columns(table, &self.feature_columns)?;
        self.feature_columns
            .iter()
            .map(|c| table.require_numeric(c).map_err(ModelError::from))
            .collect()
    }

    /// Fit both regressions. Refitting replaces the previous state.
    pub fn fit(&mut self, table: &Table) -> Result<&mut Self, ModelError> {
        let required: Vec<&str> = self
            .feature_columns
            .iter()
            .map(String::as_str)
            .chain(TARGET_COLUMNS)
            .collect();
        Schema::numeric(&required).validate(table)?;
        if table.row_count() == 0 {
            return Err(ModelError::InsufficientRows { rows: 0 });
        }

        let span = tracing::debug_span!(
            "fit",
            model = "iclhf",
            rows = table.row_count(),
            fit_duration_ms = tracing::field::Empty
        );
        let _guard = span.enter();
        let start = Instant::now();

        let features = self.feature_slices(table)?;
        let lexical = LinearFit::fit(&features, table.require_numeric(LEXICAL_DIVERSITY)?)?;
        let syntax = LinearFit::fit(&features, table.require_numeric(SYNTAX_COMPLEXITY)?)?;

        span.record(metrics::FIT_DURATION, start.elapsed().as_millis() as u64);
        tracing::debug!("model fitted");
        self.state = ModelState::Trained { lexical, syntax };
        Ok(self)
    }

    /// `lexical_diversity_hat` and `syntax_complexity_hat`, row-aligned with `table`.
    pub fn predict(&self, table: &Table) -> Result<Table, ModelError> {
        let (lexical, syntax) = self.trained()?;
        let features = self.feature_slices(table)?;
        Ok(Table::from_columns([
            (LEXICAL_DIVERSITY_HAT, lexical.predict(&features)),
            (SYNTAX_COMPLEXITY_HAT, syntax.predict(&features)),
        ])?)
    }

    /// Coefficients per target, three decimals.
    pub fn summary(&self) -> Result<String, ModelError> {
        let (lexical, syntax) = self.trained()?;
        let line = |target: &str, fit: &LinearFit| {
            let weights: Vec<String> = self
                .feature_columns
                .iter()
                .zip(&fit.coef)
                .map(|(name, w)| format!("{name}:{w:.3}"))
                .collect();
            format!("{target} ~ {} | intercept={:.3}", weights.join(", "), fit.intercept)
        };
        Ok(format!(
            "ICLHFModel\n{}\n{}",
            line(LEXICAL_DIVERSITY, lexical),
            line(SYNTAX_COMPLEXITY, syntax)
        ))
    }

    pub fn to_record(&self) -> Result<ModelRecord, ModelError> {
        let (lexical, syntax) = self.trained()?;
        Ok(ModelRecord {
            feature_columns: self.feature_columns.clone(),
            lexical: Some(lexical.clone()),
            syntax: Some(syntax.clone()),
        })
    }

    pub fn from_record(record: ModelRecord) -> Result<Self, ModelError> {
        let lexical = record
            .lexical
            .ok_or_else(|| ModelError::malformed("missing 'lexical' block"))?;
        let syntax = record
            .syntax
            .ok_or_else(|| ModelError::malformed("missing 'syntax' block"))?;
        let expected = record.feature_columns.len();
        for (name, fit) in [("lexical", &lexical), ("syntax", &syntax)] {
            if fit.coef.len() != expected {
                return Err(ModelError::malformed(format!(
                    "'{name}' has {} coefficients for {expected} feature columns",
                    fit.coef.len()
                )));
            }
        }
        Ok(Self {
            feature_columns: record.feature_columns,
            state: ModelState::Trained { lexical, syntax },
        })
    }

    /// Pretty-printed JSON record.
    pub fn to_json(&self) -> Result<String, ModelError> {
        let record = self.to_record()?;
        serde_json::to_string_pretty(&record).map_err(|e| ModelError::malformed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let record: ModelRecord =
            serde_json::from_str(json).map_err(|e| ModelError::malformed(e.to_string()))?;
        Self::from_record(record)
    }
}
