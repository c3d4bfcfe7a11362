//! In-memory observation table with named, equal-length columns.
//!
//! Columns keep insertion order. Numeric columns hold `f64`; text columns
//! exist so that externally loaded data can carry non-numeric cells and be
//! rejected by the schema validator instead of silently coerced.

use serde::{Deserialize, Serialize};

use crate::errors::{SchemaError, TableError};

/// Cell storage for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Type label used in schema error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Numeric(_) => "float64",
            Self::Text(_) => "text",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Self::Numeric(v) => Some(v),
            Self::Text(_) => None,
        }
    }

    fn select(&self, indices: &[usize]) -> Self {
        match self {
            Self::Numeric(v) => Self::Numeric(indices.iter().map(|&i| v[i]).collect()),
            Self::Text(v) => Self::Text(indices.iter().map(|&i| v[i].clone()).collect()),
        }
    }
}

impl From<Vec<f64>> for ColumnData {
    fn from(values: Vec<f64>) -> Self {
        Self::Numeric(values)
    }
}

impl From<Vec<String>> for ColumnData {
    fn from(values: Vec<String>) -> Self {
        Self::Text(values)
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// A collection of equal-length named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableRecord")]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

/// Serialized shape of a `Table`; rebuilt column by column on load.
#[derive(Deserialize)]
struct TableRecord {
    columns: Vec<Column>,
    rows: usize,
}

impl TryFrom<TableRecord> for Table {
    type Error = TableError;

    fn try_from(record: TableRecord) -> Result<Self, Self::Error> {
        let mut table = Table::new();
        for column in record.columns {
            table.push_column(column.name, column.data)?;
        }
        if table.rows != record.rows {
            return Err(TableError::LengthMismatch {
                column: table.columns.first().map(|c| c.name.clone()).unwrap_or_default(),
                expected: record.rows,
                actual: table.rows,
            });
        }
        Ok(table)
    }
}

impl Table {
    /// Create an empty table with no columns and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, data)` pairs. All columns must share one length.
    pub fn from_columns<N, D, I>(columns: I) -> Result<Self, TableError>
    where
        N: Into<String>,
        D: Into<ColumnData>,
        I: IntoIterator<Item = (N, D)>,
    {
        let mut table = Self::new();
        for (name, data) in columns {
            table.push_column(name, data)?;
        }
        Ok(table)
    }

    /// Append a column. The first column fixes the row count.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        data: impl Into<ColumnData>,
    ) -> Result<(), TableError> {
        let name = name.into();
        let data = data.into();
        if self.contains(&name) {
            return Err(TableError::DuplicateColumn(name));
        }
        if self.columns.is_empty() {
            self.rows = data.len();
        } else if data.len() != self.rows {
            return Err(TableError::LengthMismatch {
                column: name,
                expected: self.rows,
                actual: data.len(),
            });
        }
        self.columns.push(Column { name, data });
        Ok(())
    }

    /// Insert or overwrite a column, keeping its position when it already exists.
    pub fn set_column(
        &mut self,
        name: impl Into<String>,
        data: impl Into<ColumnData>,
    ) -> Result<(), TableError> {
        let name = name.into();
        let data = data.into();
        match self.columns.iter().position(|c| c.name == name) {
            Some(idx) => {
                if self.columns.len() > 1 && data.len() != self.rows {
                    return Err(TableError::LengthMismatch {
                        column: name,
                        expected: self.rows,
                        actual: data.len(),
                    });
                }
                self.rows = data.len();
                self.columns[idx].data = data;
                Ok(())
            }
            None => self.push_column(name, data),
        }
    }

    /// Builder-style `set_column`.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        data: impl Into<ColumnData>,
    ) -> Result<Self, TableError> {
        self.set_column(name, data)?;
        Ok(self)
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Numeric values of `name`, if present and numeric.
    pub fn numeric(&self, name: &str) -> Option<&[f64]> {
        self.column(name).and_then(|c| c.data.as_numeric())
    }

    /// Numeric values of `name`, reporting absence or wrong type as a schema error.
    pub fn require_numeric(&self, name: &str) -> Result<&[f64], SchemaError> {
        let column = self.column(name).ok_or_else(|| SchemaError::MissingColumns {
            columns: vec![name.to_string()],
        })?;
        column
            .data
            .as_numeric()
            .ok_or_else(|| SchemaError::NonNumericColumn {
                column: name.to_string(),
                actual: column.data.kind_name().to_string(),
            })
    }

    /// A new table holding the given rows, in the given order.
    /// Indices must be in bounds.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    data: c.data.select(indices),
                })
                .collect(),
            rows: if self.columns.is_empty() { 0 } else { indices.len() },
        }
    }

    /// The first `n` rows (or all rows if fewer).
    pub fn head(&self, n: usize) -> Self {
        let indices: Vec<usize> = (0..n.min(self.rows)).collect();
        self.select_rows(&indices)
    }

    /// A copy of this table without `name`.
    pub fn without_column(&self, name: &str) -> Result<Self, TableError> {
        if !self.contains(name) {
            return Err(TableError::UnknownColumn(name.to_string()));
        }
        let columns: Vec<Column> = self
            .columns
            .iter()
            .filter(|c| c.name != name)
            .cloned()
            .collect();
        let rows = if columns.is_empty() { 0 } else { self.rows };
        Ok(Self { columns, rows })
    }

    /// Append every column of `other` to the right of this table.
    pub fn hstack(&self, other: &Table) -> Result<Self, TableError> {
        let mut out = self.clone();
        for column in &other.columns {
            out.push_column(column.name.clone(), column.data.clone())?;
        }
        Ok(out)
    }
}
