//! CSV and JSON artifacts.
//!
//! Datasets travel as CSV with a header row. A column whose cells all parse
//! as `f64` is numeric; an empty cell reads as NaN. Any other cell turns the
//! whole column into text.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use verbaterra_core::{ColumnData, Table};

pub const DATASET_FILE: &str = "dataset.csv";

/// `path` itself, or `path/dataset.csv` when `path` is a directory.
pub fn dataset_path(path: &Path) -> Result<PathBuf> {
    let candidate = if path.is_dir() {
        path.join(DATASET_FILE)
    } else {
        path.to_path_buf()
    };
    if !candidate.is_file() {
        bail!(
            "Could not locate a dataset at '{}'. \
             Expected a CSV file or a directory containing '{DATASET_FILE}'.",
            path.display()
        );
    }
    Ok(candidate)
}

pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open dataset '{}'", path.display()))?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| {
            format!("malformed CSV record {} in '{}'", line + 1, path.display())
        })?;
        for (column, value) in cells.iter_mut().zip(record.iter()) {
            column.push(value.to_string());
        }
    }

    let mut table = Table::new();
    for (name, values) in headers.into_iter().zip(cells) {
        table.push_column(name, parse_column(values))?;
    }
    tracing::debug!(path = %path.display(), rows = table.row_count(), "dataset loaded");
    Ok(table)
}

fn parse_column(values: Vec<String>) -> ColumnData {
    let parsed: Option<Vec<f64>> = values
        .iter()
        .map(|v| {
            let v = v.trim();
            if v.is_empty() {
                Some(f64::NAN)
            } else {
                v.parse().ok()
            }
        })
        .collect();
    match parsed {
        Some(numbers) => ColumnData::Numeric(numbers),
        None => ColumnData::Text(values),
    }
}

pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create '{}'", path.display()))?;
    writer.write_record(table.column_names())?;
    for row in 0..table.row_count() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|column| match &column.data {
                ColumnData::Numeric(values) if values[row].is_nan() => String::new(),
                ColumnData::Numeric(values) => values[row].to_string(),
                ColumnData::Text(values) => values[row].clone(),
            })
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Pretty JSON with a trailing newline.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    fs::write(path, text).with_context(|| format!("failed to write '{}'", path.display()))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory '{}'", path.display()))
}
