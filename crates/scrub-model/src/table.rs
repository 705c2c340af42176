#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::value::Value;

/// One record: a field-name-to-value mapping. Rows may be ragged — a key
/// missing from the map is treated as absent, never as an error.
pub type Row = BTreeMap<String, Value>;

/// An ordered sequence of rows plus the column order used for presentation
/// and export. Cells live in the rows; `columns` is only the order
/// authority and carries no guarantee that every row has every column.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from rows alone, deriving the column order from
    /// first appearance across all rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        Self { columns, rows }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row, conventionally the type-inference sample.
    pub fn sample_row(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// New table with the same columns but different rows.
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Project the table onto a subset of fields, preserving the existing
    /// column order. Fields the table does not know stay out.
    pub fn select_fields(&self, fields: &[String]) -> Self {
        let columns: Vec<String> = self
            .columns
            .iter()
            .filter(|c| fields.iter().any(|f| f == *c))
            .cloned()
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .filter(|(key, _)| columns.iter().any(|c| c == *key))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }
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
    fn from_rows_collects_columns_in_first_seen_order() {
        let table = Table::from_rows(vec![
            row(&[("b", Value::Number(1.0)), ("a", Value::Null)]),
            row(&[("c", Value::Bool(true))]),
        ]);
        // BTreeMap iterates keys sorted, so per-row order is alphabetical
        assert_eq!(table.columns, vec!["a", "b", "c"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn select_fields_drops_unknown_and_keeps_order() {
        let table = Table::from_rows(vec![row(&[
            ("amount", Value::Number(10.0)),
            ("name", Value::Text("ada".into())),
            ("joined", Value::Null),
        ])]);
        let projected = table.select_fields(&["name".to_string(), "missing".to_string()]);
        assert_eq!(projected.columns, vec!["name"]);
        assert_eq!(projected.rows[0].len(), 1);
    }
}
