//! Row validation.
//!
//! Two independent predicates, combined with AND per row: a schema predicate
//! (required fields present and non-empty) and a logic predicate (`joined`
//! must not lie in the future). Failing rows are dropped whole — no partial
//! correction is attempted.

use chrono::{Local, NaiveDate};
use scrub_model::{Row, Table, Value};
use tracing::debug;

use crate::datetime::parse_strict_date;

/// Validate against the current local date.
pub fn validate_rows(table: &Table, required_fields: &[String]) -> Table {
    validate_rows_at(table, required_fields, Local::now().date_naive())
}

/// Validate against an explicit reference date. With an empty required list
/// only the logic predicate constrains rows.
pub fn validate_rows_at(table: &Table, required_fields: &[String], today: NaiveDate) -> Table {
    let rows: Vec<Row> = table
        .rows
        .iter()
        .filter(|row| schema_valid(row, required_fields) && logic_valid(row, today))
        .cloned()
        .collect();
    let dropped = table.rows.len() - rows.len();
    if dropped > 0 {
        debug!(dropped, "validation dropped rows");
    }
    table.with_rows(rows)
}

/// Every required field must be present, non-null and non-empty.
fn schema_valid(row: &Row, required_fields: &[String]) -> bool {
    required_fields.iter().all(|field| match row.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::Text(raw)) => !raw.is_empty(),
        Some(_) => true,
    })
}

/// A `joined` date strictly after today is invalid. Absent, null or
/// unparseable values do not constrain the row.
fn logic_valid(row: &Row, today: NaiveDate) -> bool {
    let joined = row.get("joined").and_then(|value| {
        value
            .as_date()
            .or_else(|| value.as_text().and_then(parse_strict_date))
    });
    match joined {
        Some(date) => date <= today,
        None => true,
    }
}
