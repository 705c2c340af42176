//! Missing-value detection and resolution.
//!
//! A value is missing when it is `Null` or its trimmed lower-cased text form
//! is one of the sentinel spellings. The strategy decides what happens to
//! rows containing missing values; `Passthrough` (the unknown-name fallback)
//! leaves the table untouched.

use scrub_model::{FieldType, FieldTypeMap, MissingStrategy, Row, Table, Value};

/// Text spellings judged semantically absent, distinct from present-but-falsy
/// values like `false` or `0`.
const MISSING_SENTINELS: [&str; 6] = ["n/a", "na", "null", "none", "", "-"];

/// Whether a cell value counts as missing. An absent key (`None`) is missing.
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Text(raw)) => {
            MISSING_SENTINELS.contains(&raw.trim().to_lowercase().as_str())
        }
        Some(_) => false,
    }
}

/// Apply a missing-value strategy to the whole table.
///
/// - `Drop`: keep only rows where no present field is missing.
/// - `Impute`: replace each missing value with its type's default.
/// - `Flag`: keep values as-is and add an `is_<field>_missing` boolean
///   sibling per field (doubles the field count).
/// - `Passthrough`: identity.
pub fn resolve_missing(table: &Table, types: &FieldTypeMap, strategy: MissingStrategy) -> Table {
    match strategy {
        MissingStrategy::Drop => {
            let rows = table
                .rows
                .iter()
                .filter(|row| row.values().all(|value| !is_missing(Some(value))))
                .cloned()
                .collect();
            table.with_rows(rows)
        }
        MissingStrategy::Impute => {
            let rows = table
                .rows
                .iter()
                .map(|row| impute_row(row, types))
                .collect();
            table.with_rows(rows)
        }
        MissingStrategy::Flag => flag_table(table),
        MissingStrategy::Passthrough => table.clone(),
    }
}

fn impute_row(row: &Row, types: &FieldTypeMap) -> Row {
    row.iter()
        .map(|(field, value)| {
            let filled = if is_missing(Some(value)) {
                default_for(types.get(field).copied())
            } else {
                value.clone()
            };
            (field.clone(), filled)
        })
        .collect()
}

/// Type-specific imputation default. Fields with no mapped type (or date
/// fields, which have no sensible default) impute to `Null`.
fn default_for(field_type: Option<FieldType>) -> Value {
    match field_type {
        Some(FieldType::Text) => Value::Text("unknown".to_string()),
        Some(FieldType::Number) => Value::Number(0.0),
        Some(FieldType::Boolean) => Value::Bool(false),
        Some(FieldType::Date) | None => Value::Null,
    }
}

fn flag_table(table: &Table) -> Table {
    let mut columns = Vec::with_capacity(table.columns.len() * 2);
    for column in &table.columns {
        columns.push(column.clone());
        columns.push(flag_name(column));
    }
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut flagged = Row::new();
            for (field, value) in row {
                flagged.insert(field.clone(), value.clone());
                flagged.insert(flag_name(field), Value::Bool(is_missing(Some(value))));
            }
            flagged
        })
        .collect();
    Table { columns, rows }
}

fn flag_name(field: &str) -> String {
    format!("is_{field}_missing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_missing() {
        for raw in ["n/a", "NA", " null ", "None", "", "-"] {
            assert!(is_missing(Some(&Value::Text(raw.into()))), "raw: {raw:?}");
        }
        assert!(is_missing(Some(&Value::Null)));
        assert!(is_missing(None));
    }

    #[test]
    fn falsy_values_are_not_missing() {
        assert!(!is_missing(Some(&Value::Bool(false))));
        assert!(!is_missing(Some(&Value::Number(0.0))));
        assert!(!is_missing(Some(&Value::Text("0".into()))));
    }
}
