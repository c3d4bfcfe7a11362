//! VerbaterraErrorCode trait for structured error reporting at the boundary.

/// Every error enum implements this to provide a stable error code string
/// that callers (CLI, event sinks) can match on without parsing messages.
pub trait VerbaterraErrorCode {
    /// Returns the error code string (e.g., "SCHEMA_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const UNKNOWN_KEY: &str = "UNKNOWN_KEY";
pub const NOT_FITTED: &str = "NOT_FITTED";
pub const MALFORMED_MODEL: &str = "MALFORMED_MODEL";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const TABLE_ERROR: &str = "TABLE_ERROR";
