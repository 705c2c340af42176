//! File loading and export against real temp files.

use std::fs;
use std::path::PathBuf;

use scrub_model::{Table, Value};
use scrub_ingest::{export_csv, export_json, load_table};

fn temp_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "scrub-ingest-test-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn loads_csv_with_header_order_and_trimmed_text_cells() {
    let dir = temp_dir("csv");
    let path = dir.join("people.csv");
    fs::write(
        &path,
        "name,amount,joined\n Alice ,\"1,000\",2023-01-02\nBob,,\n",
    )
    .unwrap();

    let table = load_table(&path).unwrap();
    assert_eq!(table.columns, vec!["name", "amount", "joined"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0]["name"], Value::Text("Alice".into()));
    assert_eq!(table.rows[0]["amount"], Value::Text("1,000".into()));
    assert_eq!(table.rows[1]["amount"], Value::Text(String::new()));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn loads_json_array_of_flat_objects() {
    let dir = temp_dir("json");
    let path = dir.join("rows.json");
    fs::write(
        &path,
        r#"[{"name":"Alice","amount":1200,"active":true},{"name":"Bob","amount":null}]"#,
    )
    .unwrap();

    let table = load_table(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0]["amount"], Value::Number(1200.0));
    assert_eq!(table.rows[0]["active"], Value::Bool(true));
    assert_eq!(table.rows[1]["amount"], Value::Null);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn nested_json_is_a_parse_error() {
    let dir = temp_dir("nested");
    let path = dir.join("rows.json");
    fs::write(&path, r#"[{"name":{"first":"Alice"}}]"#).unwrap();
    assert!(load_table(&path).is_err());
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn csv_export_writes_canonical_cells_and_empty_nulls() {
    let dir = temp_dir("export-csv");
    let path = dir.join("out").join("cleaned.csv");

    let mut row = scrub_model::Row::new();
    row.insert("amount".to_string(), Value::Number(1200.0));
    row.insert("name".to_string(), Value::Null);
    let table = Table {
        columns: vec!["name".to_string(), "amount".to_string()],
        rows: vec![row],
    };

    export_csv(&table, &path).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "name,amount\n,1200\n");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn json_export_reloads_to_the_same_table() {
    let dir = temp_dir("export-json");
    let path = dir.join("cleaned.json");

    let mut row = scrub_model::Row::new();
    row.insert("amount".to_string(), Value::Number(42.0));
    row.insert("name".to_string(), Value::Text("alice".into()));
    let table = Table {
        columns: vec!["name".to_string(), "amount".to_string()],
        rows: vec![row],
    };

    export_json(&table, &path).unwrap();
    let reloaded = load_table(&path).unwrap();
    assert_eq!(reloaded.rows, table.rows);

    fs::remove_dir_all(dir).unwrap();
}
