//! CSV/JSON loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use scrub_model::{Result, Row, ScrubError, Table, Value};
use tracing::info;

/// Load a table from a `.csv` or `.json` file, dispatching on the
/// extension. Any other extension is the one format error this boundary
/// surfaces explicitly.
pub fn load_table(path: &Path) -> Result<Table> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    let table = match extension.as_deref() {
        Some("csv") => load_csv(path)?,
        Some("json") => load_json(path)?,
        _ => {
            return Err(ScrubError::UnsupportedFormat(
                path.display().to_string(),
            ));
        }
    };
    info!(path = %path.display(), rows = table.len(), columns = table.columns.len(), "loaded table");
    Ok(table)
}

/// Every CSV cell arrives as trimmed raw text; type inference and cleaning
/// decide later what it means. Header order becomes the column order.
fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| ScrubError::Parse(e.to_string()))?;
    let headers = reader
        .headers()
        .map_err(|e| ScrubError::Parse(e.to_string()))?
        .clone();

    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record.map_err(|e| ScrubError::Parse(e.to_string()))?;
        let mut row = Row::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), Value::Text(cell.trim().to_string()));
        }
        table.push_row(row);
    }
    Ok(table)
}

/// JSON input must be an array of flat objects; scalars map directly onto
/// the value variant and nested structures are rejected.
fn load_json(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    let parsed: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ScrubError::Parse(e.to_string()))?;

    let mut rows = Vec::with_capacity(parsed.len());
    for object in parsed {
        let mut row = Row::new();
        for (field, value) in object {
            row.insert(field, json_to_value(&value)?);
        }
        rows.push(row);
    }
    Ok(Table::from_rows(rows))
}

fn json_to_value(value: &serde_json::Value) -> Result<Value> {
    match value {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(Value::Number)
            .ok_or_else(|| ScrubError::Parse(format!("non-finite number: {n}"))),
        serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(ScrubError::Parse(
            "nested arrays/objects are not tabular".to_string(),
        )),
    }
}
