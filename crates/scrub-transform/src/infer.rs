//! Field type inference from a single sample row.
//!
//! Inference is a pure function of one row (conventionally the first row of
//! the table) and never scans further — per-row disagreement later in the
//! table is the cleaning stage's problem, not inference's. The resulting map
//! is authoritative for the rest of the pipeline and is never re-run
//! mid-pipeline.

use scrub_model::{FieldType, FieldTypeMap, Row, Value};

use crate::datetime::parse_strict_date;

/// Tokens recognized as boolean signals during inference. Checked before
/// the numeric parse, so a lone "1" or "0" infers as boolean.
const BOOLEAN_TOKENS: [&str; 6] = ["true", "false", "yes", "no", "1", "0"];

/// Infer a type for every field present in the sample row.
///
/// Fields absent from the sample are absent from the map and stay opaque to
/// later stages.
pub fn infer_types(sample: &Row) -> FieldTypeMap {
    sample
        .iter()
        .map(|(field, value)| (field.clone(), infer_field_type(value)))
        .collect()
}

/// Precedence, strictly ordered: empty → string, boolean token → boolean,
/// comma-stripped finite number → number, strict date format → date,
/// anything else → string.
fn infer_field_type(value: &Value) -> FieldType {
    let raw = match value {
        Value::Number(_) => return FieldType::Number,
        Value::Bool(_) => return FieldType::Boolean,
        Value::Date(_) => return FieldType::Date,
        // empty values carry no type signal
        Value::Null => return FieldType::Text,
        Value::Text(raw) => raw.trim(),
    };

    if raw.is_empty() {
        return FieldType::Text;
    }
    if BOOLEAN_TOKENS.contains(&raw.to_lowercase().as_str()) {
        return FieldType::Boolean;
    }
    let without_commas = raw.replace(',', "");
    if without_commas
        .parse::<f64>()
        .is_ok_and(|n| n.is_finite())
    {
        return FieldType::Number;
    }
    if parse_strict_date(raw).is_some() {
        return FieldType::Date;
    }
    FieldType::Text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_tokens_win_over_numbers() {
        assert_eq!(
            infer_field_type(&Value::Text("1".into())),
            FieldType::Boolean
        );
        assert_eq!(
            infer_field_type(&Value::Text("YES".into())),
            FieldType::Boolean
        );
    }

    #[test]
    fn thousands_commas_do_not_hide_numbers() {
        assert_eq!(
            infer_field_type(&Value::Text("1,200".into())),
            FieldType::Number
        );
        assert_eq!(
            infer_field_type(&Value::Text("-3.5".into())),
            FieldType::Number
        );
    }

    #[test]
    fn empty_and_unknown_default_to_text() {
        assert_eq!(infer_field_type(&Value::Text("  ".into())), FieldType::Text);
        assert_eq!(infer_field_type(&Value::Null), FieldType::Text);
        assert_eq!(
            infer_field_type(&Value::Text("alice".into())),
            FieldType::Text
        );
    }

    #[test]
    fn strict_dates_infer_as_date() {
        assert_eq!(
            infer_field_type(&Value::Text("2023-12-25".into())),
            FieldType::Date
        );
        assert_eq!(
            infer_field_type(&Value::Text("25 Dec 2023".into())),
            FieldType::Date
        );
    }
}
