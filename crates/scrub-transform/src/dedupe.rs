//! Duplicate-row removal.
//!
//! Both operations are a single left-to-right pass over the rows with a
//! seen-set of canonical key strings; the first occurrence wins and the
//! relative order of survivors is preserved. Key computation is total —
//! heterogeneous or absent values never fail it.

use std::collections::BTreeSet;

use scrub_model::{Row, Table, Value};
use tracing::debug;

/// Remove rows that are deeply equal to an earlier row (field-by-field,
/// independent of field order).
pub fn deduplicate_exact(table: &Table) -> Table {
    let mut seen = BTreeSet::new();
    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        if seen.insert(row_fingerprint(row)) {
            rows.push(row.clone());
        }
    }
    let removed = table.rows.len() - rows.len();
    if removed > 0 {
        debug!(removed, "exact deduplication dropped rows");
    }
    table.with_rows(rows)
}

/// Keep the first row per composite key, where the key joins the stringified
/// values of the given fields with `|`. Absent fields stringify empty.
pub fn deduplicate_by_keys(table: &Table, keys: &[String]) -> Table {
    let mut seen = BTreeSet::new();
    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let composite = keys
            .iter()
            .map(|key| row.get(key).map(ToString::to_string).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("|");
        if seen.insert(composite) {
            rows.push(row.clone());
        }
    }
    table.with_rows(rows)
}

/// Canonical fingerprint of a row: sorted (field, tagged value) pairs. The
/// variant tag keeps `Text("12")` distinct from `Number(12)` and `Null`
/// distinct from empty text.
fn row_fingerprint(row: &Row) -> String {
    let mut fingerprint = String::new();
    for (field, value) in row {
        fingerprint.push_str(field);
        fingerprint.push('\u{1}');
        fingerprint.push(match value {
            Value::Null => '0',
            Value::Text(_) => 't',
            Value::Number(_) => 'n',
            Value::Bool(_) => 'b',
            Value::Date(_) => 'd',
        });
        fingerprint.push_str(&value.to_string());
        fingerprint.push('\u{2}');
    }
    fingerprint
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn fingerprint_distinguishes_variants() {
        let text = row(&[("a", Value::Text("12".into()))]);
        let number = row(&[("a", Value::Number(12.0))]);
        let null = row(&[("a", Value::Null)]);
        let empty = row(&[("a", Value::Text(String::new()))]);
        assert_ne!(row_fingerprint(&text), row_fingerprint(&number));
        assert_ne!(row_fingerprint(&null), row_fingerprint(&empty));
    }

    #[test]
    fn fingerprint_ignores_insertion_order() {
        let a = row(&[("x", Value::Number(1.0)), ("y", Value::Bool(true))]);
        let b = row(&[("y", Value::Bool(true)), ("x", Value::Number(1.0))]);
        assert_eq!(row_fingerprint(&a), row_fingerprint(&b));
    }
}
