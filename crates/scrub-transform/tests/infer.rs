//! Tests for field type inference.

use scrub_model::{FieldType, Row, Value};
use scrub_transform::infer_types;

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), Value::Text((*v).to_string())))
        .collect()
}

#[test]
fn infers_each_type_from_one_sample_row() {
    let sample = row(&[
        ("name", "Alice"),
        ("amount", "1,200"),
        ("active", "yes"),
        ("joined", "2023-12-25"),
        ("notes", ""),
    ]);
    let types = infer_types(&sample);
    assert_eq!(types["name"], FieldType::Text);
    assert_eq!(types["amount"], FieldType::Number);
    assert_eq!(types["active"], FieldType::Boolean);
    assert_eq!(types["joined"], FieldType::Date);
    assert_eq!(types["notes"], FieldType::Text);
}

#[test]
fn inference_is_deterministic() {
    let sample = row(&[("a", "12"), ("b", "maybe"), ("c", "2021-01-01")]);
    let first = infer_types(&sample);
    let second = infer_types(&sample);
    assert_eq!(first, second);
}

#[test]
fn fields_absent_from_sample_are_absent_from_map() {
    let sample = row(&[("present", "1")]);
    let types = infer_types(&sample);
    assert_eq!(types.len(), 1);
    assert!(!types.contains_key("absent"));
}

#[test]
fn boolean_tokens_take_precedence_over_numeric_parse() {
    let types = infer_types(&row(&[("flag", "0"), ("count", "10")]));
    assert_eq!(types["flag"], FieldType::Boolean);
    assert_eq!(types["count"], FieldType::Number);
}

#[test]
fn already_typed_values_infer_directly() {
    let mut sample = Row::new();
    sample.insert("n".to_string(), Value::Number(3.5));
    sample.insert("b".to_string(), Value::Bool(true));
    sample.insert("missing".to_string(), Value::Null);
    let types = infer_types(&sample);
    assert_eq!(types["n"], FieldType::Number);
    assert_eq!(types["b"], FieldType::Boolean);
    assert_eq!(types["missing"], FieldType::Text);
}
