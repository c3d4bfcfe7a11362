//! Regression models and the model registry.

pub mod evaluation;
pub mod iclhf;
pub mod ols;
pub mod record;

use std::fmt;

use verbaterra_core::errors::{RegistryError, RegistryKind};

pub use evaluation::{evaluate, Evaluation};
pub use iclhf::{IclhfModel, ModelState};
pub use ols::LinearFit;
pub use record::ModelRecord;

/// The closed set of registered models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Iclhf,
}

impl ModelKind {
    pub const ALL: [ModelKind; 1] = [ModelKind::Iclhf];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Iclhf => "iclhf",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Iclhf => "Two-target OLS over ritual, trade, symbolism, hierarchy",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, RegistryError> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RegistryError::unknown(RegistryKind::Model, name, &available_models()))
    }

    /// A fresh untrained instance.
    pub fn create(&self) -> IclhfModel {
        match self {
            Self::Iclhf => IclhfModel::new(),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn available_models() -> Vec<&'static str> {
    ModelKind::ALL.iter().map(ModelKind::name).collect()
}

/// Look up `name` and return an untrained model.
pub fn create_model(name: &str) -> Result<IclhfModel, RegistryError> {
    Ok(ModelKind::from_name(name)?.create())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model_by_name() {
        assert!(!create_model("ICLHF").unwrap().is_fitted());
    }

    #[test]
    fn test_unknown_model() {
        let err = create_model("forest").unwrap_err();
        assert_eq!(err.to_string(), "Unknown model 'forest'. Available: iclhf");
    }
}
