//! Value canonicalization.
//!
//! Coerces raw text into the canonical form for its field's inferred type.
//! Already-typed values (numbers, booleans, dates, nulls — e.g. post-impute
//! defaults) pass through untouched. Per-value failures never abort the
//! batch: anything unparseable degrades to `Null` and the row survives;
//! dropping on bad values is the validator's job.

use scrub_model::{FieldType, FieldTypeMap, Table, Value};
use tracing::debug;

use crate::datetime::parse_strict_date;
use crate::numwords::resolve_number_words;

const TRUTHY: [&str; 3] = ["yes", "true", "1"];
const FALSY: [&str; 3] = ["no", "false", "0"];

/// Clean every value in the table according to the field type map.
pub fn clean_values(table: &Table, types: &FieldTypeMap) -> Table {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|(field, value)| {
                    let cleaned = clean_value(value, types.get(field).copied());
                    if cleaned.is_null() && !value.is_null() {
                        debug!(field = %field, "value degraded to null during cleaning");
                    }
                    (field.clone(), cleaned)
                })
                .collect()
        })
        .collect();
    table.with_rows(rows)
}

/// Canonicalize one value. Only raw text is transformed; fields without a
/// mapped type get the default text normalization.
pub fn clean_value(value: &Value, field_type: Option<FieldType>) -> Value {
    let raw = match value {
        Value::Text(raw) => raw.trim(),
        other => return other.clone(),
    };

    match field_type {
        Some(FieldType::Number) => clean_number(raw),
        Some(FieldType::Boolean) => clean_boolean(raw),
        Some(FieldType::Date) => clean_date(raw),
        Some(FieldType::Text) | None => clean_text(raw),
    }
}

/// Thousands commas are stripped, then number words are tried when a direct
/// parse fails ("twelve" → 12).
fn clean_number(raw: &str) -> Value {
    let without_commas = raw.replace(',', "");
    let parsed = without_commas
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .or_else(|| resolve_number_words(&without_commas));
    match parsed {
        Some(n) => Value::Number(n),
        None => Value::Null,
    }
}

fn clean_boolean(raw: &str) -> Value {
    let lowered = raw.to_lowercase();
    if TRUTHY.contains(&lowered.as_str()) {
        Value::Bool(true)
    } else if FALSY.contains(&lowered.as_str()) {
        Value::Bool(false)
    } else {
        Value::Null
    }
}

fn clean_date(raw: &str) -> Value {
    match parse_strict_date(raw) {
        Some(date) => Value::Date(date),
        None => Value::Null,
    }
}

/// Strip everything that is not a word character or whitespace, lower-case
/// the rest. Idempotent by construction.
fn clean_text(raw: &str) -> Value {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    Value::Text(stripped.to_lowercase())
}
