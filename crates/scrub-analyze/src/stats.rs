//! Per-field summary statistics.

use std::collections::BTreeMap;

use scrub_model::{FieldType, FieldTypeMap, Table, Value};

/// Summary of one numeric field over the whole table.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FieldSummary {
    pub count: usize,
    pub mean: f64,
    /// Middle element of the ascending-sorted values. For even-length
    /// inputs this is the element at index `n / 2` (the lower middle),
    /// never an average of the two middles.
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation (divide by n, not n - 1).
    pub std: f64,
}

/// Compute summaries for every field the type map calls numeric. Fields
/// with no numeric values in the table are omitted.
pub fn summary_stats(table: &Table, types: &FieldTypeMap) -> BTreeMap<String, FieldSummary> {
    let mut summaries = BTreeMap::new();
    for (field, field_type) in types {
        if *field_type != FieldType::Number {
            continue;
        }
        let values = numeric_values(table, field);
        if let Some(summary) = summarize(&values) {
            summaries.insert(field.clone(), summary);
        }
    }
    summaries
}

/// Numeric values of one field, in row order. Non-number variants (including
/// numeric-looking text) are skipped.
pub(crate) fn numeric_values(table: &Table, field: &str) -> Vec<f64> {
    table
        .rows
        .iter()
        .filter_map(|row| match row.get(field) {
            Some(Value::Number(n)) => Some(*n),
            _ => None,
        })
        .collect()
}

fn summarize(values: &[f64]) -> Option<FieldSummary> {
    if values.is_empty() {
        return None;
    }
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64).sqrt();

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(FieldSummary {
        count,
        mean,
        median: sorted[count / 2],
        min: sorted[0],
        max: sorted[count - 1],
        std,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_takes_the_lower_middle_for_even_inputs() {
        let summary = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(summary.median, 3.0);
    }

    #[test]
    fn std_is_population() {
        // values 2 and 4: mean 3, population std 1 (sample std would be sqrt(2))
        let summary = summarize(&[2.0, 4.0]).unwrap();
        assert_eq!(summary.std, 1.0);
    }

    #[test]
    fn empty_input_has_no_summary() {
        assert!(summarize(&[]).is_none());
    }
}
