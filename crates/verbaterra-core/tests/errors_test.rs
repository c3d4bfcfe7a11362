//! Tests for error codes, messages, and `From` conversions.

use verbaterra_core::errors::*;

#[test]
fn test_unknown_key_lists_available_sorted() {
    let err = RegistryError::unknown(RegistryKind::Engine, "foo", &["vsion", "cch", "nphra"]);
    assert_eq!(
        err.to_string(),
        "Unknown engine 'foo'. Available: cch, nphra, vsion"
    );
    assert_eq!(err.error_code(), "UNKNOWN_KEY");
}

#[test]
fn test_missing_columns_message_names_columns() {
    let err = SchemaError::MissingColumns {
        columns: vec!["trade".into(), "hierarchy".into()],
    };
    let message = err.to_string();
    assert!(message.contains("trade"));
    assert!(message.contains("hierarchy"));
    assert_eq!(err.coded_string(), format!("[SCHEMA_ERROR] {message}"));
}

#[test]
fn test_non_numeric_message_names_type() {
    let err = SchemaError::NonNumericColumn {
        column: "ritual".into(),
        actual: "text".into(),
    };
    assert_eq!(
        err.to_string(),
        "column 'ritual' must be numeric; received text"
    );
}

#[test]
fn test_model_error_codes() {
    assert_eq!(ModelError::NotFitted.error_code(), "NOT_FITTED");
    assert_eq!(ModelError::malformed("no lexical").error_code(), "MALFORMED_MODEL");
    let table: ModelError = TableError::DuplicateColumn("ritual".into()).into();
    assert_eq!(table.error_code(), "TABLE_ERROR");
    let schema: ModelError = SchemaError::MissingColumns {
        columns: vec!["ritual".into()],
    }
    .into();
    assert_eq!(schema.error_code(), "SCHEMA_ERROR");
    assert!(schema.to_string().contains("ritual"));
}

#[test]
fn test_top_level_conversion_preserves_code() {
    let err: VerbaterraError = ConfigError::InvalidValue {
        field: "n".into(),
        message: "must be finite".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    let nested: VerbaterraError =
        SimulationError::from(TableError::DuplicateColumn("a".into())).into();
    assert_eq!(nested.error_code(), "TABLE_ERROR");

    let model: VerbaterraError = ModelError::NotFitted.into();
    assert!(model.coded_string().starts_with("[NOT_FITTED]"));
}
