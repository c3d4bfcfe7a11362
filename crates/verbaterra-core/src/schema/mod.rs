//! Schema validation: required columns and their expected kinds.
//!
//! Validation never mutates the table and is idempotent.

use crate::constants::MANDATORY_COLUMNS;
use crate::errors::SchemaError;
use crate::table::Table;

/// Expected kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Numeric,
}

/// One required column.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub name: String,
    pub kind: FieldKind,
    pub description: Option<String>,
}

impl SchemaField {
    /// A required numeric column.
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Numeric,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn check(&self, table: &Table) -> Result<(), SchemaError> {
        let Some(column) = table.column(&self.name) else {
            return Err(SchemaError::MissingColumns {
                columns: vec![self.name.clone()],
            });
        };
        match self.kind {
            FieldKind::Numeric if !column.data.is_numeric() => {
                Err(SchemaError::NonNumericColumn {
                    column: self.name.clone(),
                    actual: column.data.kind_name().to_string(),
                })
            }
            FieldKind::Numeric => Ok(()),
        }
    }
}

/// An ordered list of required fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub fields: Vec<SchemaField>,
}

impl Schema {
    pub fn new(fields: Vec<SchemaField>) -> Self {
        Self { fields }
    }

    /// Schema requiring every name in `columns` as a numeric field.
    pub fn numeric<S: AsRef<str>>(columns: &[S]) -> Self {
        Self::new(columns.iter().map(|c| SchemaField::numeric(c.as_ref())).collect())
    }

    /// The six mandatory observation columns.
    pub fn dataset() -> Self {
        Self::numeric(&MANDATORY_COLUMNS)
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Validate `table` against this schema.
    ///
    /// Missing columns are reported together, in schema order. Type checks
    /// only run once every field is present; the first non-numeric field
    /// in schema order is reported.
    pub fn validate(&self, table: &Table) -> Result<(), SchemaError> {
        let missing: Vec<String> = self
            .fields
            .iter()
            .filter(|f| !table.contains(&f.name))
            .map(|f| f.name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError::MissingColumns { columns: missing });
        }
        for field in &self.fields {
            field.check(table)?;
        }
        Ok(())
    }
}

/// Validate `table` against the mandatory dataset schema.
pub fn validate_dataset(table: &Table) -> Result<(), SchemaError> {
    Schema::dataset().validate(table)
}

/// Presence-only check for an arbitrary column list.
pub fn ensure_columns<S: AsRef<str>>(table: &Table, columns: &[S]) -> Result<(), SchemaError> {
    let missing: Vec<String> = columns
        .iter()
        .map(|c| c.as_ref())
        .filter(|c| !table.contains(c))
        .map(str::to_string)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::MissingColumns { columns: missing })
    }
}
