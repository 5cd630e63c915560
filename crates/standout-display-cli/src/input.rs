//! Reading tabular input into display values.

use std::io::{BufRead, Read};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde_json::{Map, Value};
use standout_display::{type_label, DisplayValue};
use tracing::debug;

/// Supported input encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Comma-separated values with a header line.
    Csv,
    /// A JSON array of objects.
    Json,
    /// One JSON object per line.
    Ndjson,
}

impl InputFormat {
    /// Guess the format from a file name, defaulting to CSV.
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_ascii_lowercase();
        if lower.ends_with(".ndjson") || lower.ends_with(".jsonl") {
            InputFormat::Ndjson
        } else if lower.ends_with(".json") {
            InputFormat::Json
        } else {
            InputFormat::Csv
        }
    }
}

/// Column metadata plus the records that will be displayed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub types: Vec<String>,
    pub records: Vec<Vec<DisplayValue>>,
}

impl Dataset {
    /// Keep only `names`, in that order.
    pub fn select(self, names: &[String]) -> Result<Self> {
        let indices = names
            .iter()
            .map(|name| {
                self.columns
                    .iter()
                    .position(|column| column == name)
                    .with_context(|| format!("unknown column '{}'", name))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Dataset {
            columns: indices.iter().map(|&i| self.columns[i].clone()).collect(),
            types: indices.iter().map(|&i| self.types[i].clone()).collect(),
            records: self
                .records
                .into_iter()
                .map(|record| indices.iter().map(|&i| record[i].clone()).collect())
                .collect(),
        })
    }
}

/// Read at most `limit` records from CSV. Every column is typed `string`.
pub fn read_csv<R: Read>(reader: R, limit: usize) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns: Vec<String> = csv_reader
        .headers()
        .context("failed to read CSV header")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().take(limit).enumerate() {
        let row = row.with_context(|| format!("failed to read CSV record {}", index + 1))?;
        let record = (0..columns.len())
            .map(|i| DisplayValue::Scalar(row.get(i).unwrap_or_default().to_string()))
            .collect();
        records.push(record);
    }

    debug!(columns = columns.len(), records = records.len(), "read CSV input");
    Ok(Dataset {
        types: vec!["string".to_string(); columns.len()],
        columns,
        records,
    })
}

/// Read at most `limit` objects from a JSON array.
pub fn read_json<R: Read>(reader: R, limit: usize) -> Result<Dataset> {
    let value: Value = serde_json::from_reader(reader).context("failed to parse JSON input")?;
    let items = match value {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        other => anyhow::bail!(
            "expected a JSON array of objects, found {}",
            type_label(&other)
        ),
    };

    let objects = items
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, item)| into_object(item, index + 1))
        .collect::<Result<Vec<_>>>()?;
    Ok(from_objects(objects))
}

/// Read at most `limit` objects, one per non-empty line.
pub fn read_ndjson<R: BufRead>(reader: R, limit: usize) -> Result<Dataset> {
    let mut objects = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        if objects.len() == limit {
            break;
        }
        let line = line.context("failed to read input line")?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line)
            .with_context(|| format!("invalid JSON on line {}", index + 1))?;
        objects.push(into_object(value, index + 1)?);
    }
    Ok(from_objects(objects))
}

fn into_object(value: Value, position: usize) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!(
            "record {} is {}, expected an object",
            position,
            type_label(&other)
        ),
    }
}

/// Columns are keys in order of first appearance; a column's type is the
/// type of its first value. Missing keys show as empty cells.
fn from_objects(objects: Vec<Map<String, Value>>) -> Dataset {
    let mut columns: Vec<String> = Vec::new();
    let mut types: Vec<String> = Vec::new();
    for object in &objects {
        for (key, value) in object {
            if !columns.contains(key) {
                columns.push(key.clone());
                types.push(type_label(value).to_string());
            }
        }
    }

    let records = objects
        .iter()
        .map(|object| {
            columns
                .iter()
                .map(|column| match object.get(column) {
                    Some(value) => DisplayValue::from_json(value),
                    None => DisplayValue::Scalar(String::new()),
                })
                .collect()
        })
        .collect();

    debug!(columns = columns.len(), records = objects.len(), "read JSON input");
    Dataset {
        columns,
        types,
        records,
    }
}
