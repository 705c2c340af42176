//! Tests for summary statistics and outlier detection.

use scrub_model::{FieldType, FieldTypeMap, Row, ScrubError, Table, Value};
use scrub_analyze::{
    check_outlier_field, detect_outliers_threshold, detect_outliers_zscore, summary_stats,
};

fn numbers_table(field: &str, values: &[f64]) -> Table {
    let rows = values
        .iter()
        .map(|v| {
            let mut row = Row::new();
            row.insert(field.to_string(), Value::Number(*v));
            row
        })
        .collect();
    Table::from_rows(rows)
}

fn number_types(field: &str) -> FieldTypeMap {
    [(field.to_string(), FieldType::Number)].into_iter().collect()
}

#[test]
fn zscore_flags_the_far_value() {
    // [10, 10, 10, 10, 1000] at threshold 2: only 1000 is flagged
    let table = numbers_table("amount", &[10.0, 10.0, 10.0, 10.0, 1000.0]);
    let flagged = detect_outliers_zscore(&table, "amount", 2.0);
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged.rows[0]["amount"], Value::Number(1000.0));
}

#[test]
fn zero_std_flags_every_non_mean_value() {
    let mut table = numbers_table("amount", &[5.0, 5.0, 5.0]);
    let flagged = detect_outliers_zscore(&table, "amount", 3.0);
    assert!(flagged.is_empty());

    // a single text stray keeps the numeric std at zero but is never flagged
    let mut stray = Row::new();
    stray.insert("amount".to_string(), Value::Text("five".into()));
    table.push_row(stray);
    let flagged = detect_outliers_zscore(&table, "amount", 3.0);
    assert!(flagged.is_empty());
}

#[test]
fn non_numeric_rows_are_never_flagged() {
    let mut table = numbers_table("amount", &[1.0, 1.0, 100.0]);
    let mut text = Row::new();
    text.insert("amount".to_string(), Value::Text("9999999".into()));
    table.push_row(text);
    let flagged = detect_outliers_zscore(&table, "amount", 1.0);
    assert!(flagged.rows.iter().all(|r| matches!(r["amount"], Value::Number(_))));
}

#[test]
fn field_without_numeric_values_yields_empty_result() {
    let table = Table::from_rows(vec![{
        let mut row = Row::new();
        row.insert("amount".to_string(), Value::Text("n/a".into()));
        row
    }]);
    assert!(detect_outliers_zscore(&table, "amount", 2.0).is_empty());
    assert!(detect_outliers_zscore(&table, "no_such_field", 2.0).is_empty());
}

#[test]
fn outlier_field_check_rejects_unknown_and_non_numeric_fields() {
    let types: FieldTypeMap = [
        ("amount".to_string(), FieldType::Number),
        ("name".to_string(), FieldType::Text),
    ]
    .into_iter()
    .collect();

    assert!(check_outlier_field(&types, "amount").is_ok());
    assert!(matches!(
        check_outlier_field(&types, "name"),
        Err(ScrubError::InvalidArgument(_))
    ));
    assert!(matches!(
        check_outlier_field(&types, "no_such_field"),
        Err(ScrubError::InvalidArgument(_))
    ));
}

#[test]
fn threshold_detector_uses_absolute_magnitude() {
    let table = numbers_table("amount", &[-2000.0, 100.0, 1500.0]);
    let flagged = detect_outliers_threshold(&table, "amount", 1000.0);
    assert_eq!(flagged.len(), 2);
    assert_eq!(flagged.rows[0]["amount"], Value::Number(-2000.0));
}

#[test]
fn median_is_the_lower_middle_element() {
    let table = numbers_table("n", &[4.0, 1.0, 3.0, 2.0]);
    let stats = summary_stats(&table, &number_types("n"));
    assert_eq!(stats["n"].median, 3.0);
}

#[test]
fn stats_cover_only_numeric_fields_with_values() {
    let mut table = numbers_table("amount", &[10.0, 20.0, 30.0]);
    for row in &mut table.rows {
        row.insert("name".to_string(), Value::Text("x".into()));
        row.insert("empty".to_string(), Value::Null);
    }
    table.columns.push("name".to_string());
    table.columns.push("empty".to_string());
    let types: FieldTypeMap = [
        ("amount".to_string(), FieldType::Number),
        ("name".to_string(), FieldType::Text),
        ("empty".to_string(), FieldType::Number),
    ]
    .into_iter()
    .collect();

    let stats = summary_stats(&table, &types);
    assert_eq!(stats.len(), 1);
    let amount = &stats["amount"];
    assert_eq!(amount.count, 3);
    assert_eq!(amount.mean, 20.0);
    assert_eq!(amount.min, 10.0);
    assert_eq!(amount.max, 30.0);
}

#[test]
fn summary_shape_snapshot() {
    let table = numbers_table("amount", &[10.0, 10.0, 10.0, 10.0, 1000.0]);
    let stats = summary_stats(&table, &number_types("amount"));
    insta::assert_json_snapshot!(stats);
}
