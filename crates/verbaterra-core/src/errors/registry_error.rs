//! Registry lookup errors (engine, metric, model names).

use std::fmt;

use super::error_code::{self, VerbaterraErrorCode};

/// Which registry a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryKind {
    Engine,
    Metric,
    Model,
}

impl RegistryKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Engine => "engine",
            Self::Metric => "metric",
            Self::Model => "model",
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when a name does not match any registered entry.
/// The message always lists the valid names.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("Unknown {kind} '{name}'. Available: {}", .available.join(", "))]
    UnknownKey {
        kind: RegistryKind,
        name: String,
        available: Vec<String>,
    },
}

impl RegistryError {
    pub fn unknown(kind: RegistryKind, name: &str, available: &[&str]) -> Self {
        let mut available: Vec<String> = available.iter().map(|s| s.to_string()).collect();
        available.sort();
        Self::UnknownKey {
            kind,
            name: name.to_string(),
            available,
        }
    }
}

impl VerbaterraErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        error_code::UNKNOWN_KEY
    }
}
