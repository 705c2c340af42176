//! Derived feature columns.
//!
//! Features are added non-destructively — original fields are retained and
//! each rule writes one new column. The built-in rules are tied to a
//! `joined`/`amount` schema; `derive_features_with` takes any rule list for
//! callers with a different shape.

use chrono::{Local, NaiveDate};
use scrub_model::{Row, Table, Value};

use crate::datetime::parse_strict_date;

/// One derived column: a name and a pure function of (row, today).
pub struct FeatureRule {
    pub name: &'static str,
    pub derive: fn(&Row, NaiveDate) -> Value,
}

/// The three built-in features, in output-column order.
pub fn builtin_features() -> Vec<FeatureRule> {
    vec![
        FeatureRule {
            name: "days_since_joined",
            derive: days_since_joined,
        },
        FeatureRule {
            name: "spending_category",
            derive: spending_category,
        },
        FeatureRule {
            name: "is_high_value",
            derive: is_high_value,
        },
    ]
}

/// Derive the built-in features against the current local date.
pub fn derive_features(table: &Table) -> Table {
    derive_features_at(table, Local::now().date_naive())
}

/// Derive the built-in features against an explicit reference date.
pub fn derive_features_at(table: &Table, today: NaiveDate) -> Table {
    derive_features_with(table, &builtin_features(), today)
}

/// Derive an arbitrary rule list. Rule columns are appended to the column
/// order unless already present.
pub fn derive_features_with(table: &Table, rules: &[FeatureRule], today: NaiveDate) -> Table {
    let mut columns = table.columns.clone();
    for rule in rules {
        if !columns.iter().any(|c| c == rule.name) {
            columns.push(rule.name.to_string());
        }
    }
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut enriched = row.clone();
            for rule in rules {
                enriched.insert(rule.name.to_string(), (rule.derive)(row, today));
            }
            enriched
        })
        .collect();
    Table { columns, rows }
}

/// Signed day count from `joined` to today; `Null` when `joined` is absent
/// or not a valid date.
fn days_since_joined(row: &Row, today: NaiveDate) -> Value {
    match joined_date(row) {
        Some(joined) => Value::Number((today - joined).num_days() as f64),
        None => Value::Null,
    }
}

/// Spending bucket from the numeric `amount`: closed lower bounds at 1000
/// ("high") and 500 ("medium"), otherwise "low"; "unknown" when `amount` is
/// not numeric.
fn spending_category(row: &Row, _today: NaiveDate) -> Value {
    let category = match row.get("amount").and_then(Value::as_number) {
        Some(amount) if amount >= 1000.0 => "high",
        Some(amount) if amount >= 500.0 => "medium",
        Some(_) => "low",
        None => "unknown",
    };
    Value::Text(category.to_string())
}

/// True iff the numeric `amount` strictly exceeds 1500. A non-numeric
/// amount is neither high nor an error: the flag is false.
fn is_high_value(row: &Row, _today: NaiveDate) -> Value {
    let high = row
        .get("amount")
        .and_then(Value::as_number)
        .is_some_and(|amount| amount > 1500.0);
    Value::Bool(high)
}

fn joined_date(row: &Row) -> Option<NaiveDate> {
    let value = row.get("joined")?;
    value
        .as_date()
        .or_else(|| value.as_text().and_then(parse_strict_date))
}
