//! Cleaned-table export.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use scrub_model::{Result, ScrubError, Table, Value};
use tracing::info;

/// Write the table as a pretty-printed JSON array of objects, fields in
/// column order.
pub fn export_json(table: &Table, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let rows: Vec<serde_json::Value> = table
        .rows
        .iter()
        .map(|row| {
            let mut object = serde_json::Map::new();
            for column in &table.columns {
                if let Some(value) = row.get(column) {
                    object.insert(column.clone(), value_to_json(value));
                }
            }
            serde_json::Value::Object(object)
        })
        .collect();

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &rows)
        .map_err(|e| ScrubError::Parse(e.to_string()))?;
    writer.flush()?;
    info!(path = %path.display(), rows = table.len(), "exported json");
    Ok(())
}

/// Write the table as CSV with a header row. Cells are the canonical display
/// strings; null and absent cells are empty.
pub fn export_csv(table: &Table, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path).map_err(|e| ScrubError::Parse(e.to_string()))?;
    writer
        .write_record(&table.columns)
        .map_err(|e| ScrubError::Parse(e.to_string()))?;
    for row in &table.rows {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| row.get(column).map(ToString::to_string).unwrap_or_default())
            .collect();
        writer
            .write_record(&record)
            .map_err(|e| ScrubError::Parse(e.to_string()))?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = table.len(), "exported csv");
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Text(s) => serde_json::Value::String(s.clone()),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Date(d) => serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
    }
}
