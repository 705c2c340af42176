//! Outlier detection over one numeric field.

use scrub_model::{FieldType, FieldTypeMap, Result, ScrubError, Table, Value};
use tracing::debug;

use crate::stats::numeric_values;

/// Check that an outlier request names a numeric field known to the type
/// map. The detectors below are total — an unknown field just yields an
/// empty result — so boundaries call this first to surface misuse as an
/// invalid-argument failure instead of a silent empty table.
pub fn check_outlier_field(types: &FieldTypeMap, field: &str) -> Result<()> {
    match types.get(field) {
        None => Err(ScrubError::InvalidArgument(format!(
            "field {field:?} does not exist in the input"
        ))),
        Some(field_type) if *field_type != FieldType::Number => {
            Err(ScrubError::InvalidArgument(format!(
                "field {field:?} is {field_type}, not numeric"
            )))
        }
        Some(_) => Ok(()),
    }
}

/// Flag rows whose z-score against the field's population mean and standard
/// deviation exceeds the threshold.
///
/// Zero-standard-deviation rule: when every numeric value is identical the
/// usual score divides by zero, so instead any value different from the mean
/// is treated as infinitely distant and flagged regardless of the threshold;
/// values equal to the mean are never flagged. Rows where the field is
/// non-numeric are never flagged.
pub fn detect_outliers_zscore(table: &Table, field: &str, z_threshold: f64) -> Table {
    let values = numeric_values(table, field);
    if values.is_empty() {
        return table.with_rows(Vec::new());
    }
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let std = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count).sqrt();
    debug!(field, mean, std, "z-score outlier scan");

    let rows = table
        .rows
        .iter()
        .filter(|row| match row.get(field) {
            Some(Value::Number(value)) => {
                if std == 0.0 {
                    *value != mean
                } else {
                    ((value - mean) / std).abs() > z_threshold
                }
            }
            _ => false,
        })
        .cloned()
        .collect();
    table.with_rows(rows)
}

/// Flag rows whose numeric value has absolute magnitude above the threshold.
pub fn detect_outliers_threshold(table: &Table, field: &str, threshold: f64) -> Table {
    let rows = table
        .rows
        .iter()
        .filter(|row| match row.get(field) {
            Some(Value::Number(value)) => value.abs() > threshold,
            _ => false,
        })
        .cloned()
        .collect();
    table.with_rows(rows)
}
