#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::fmt;

/// Semantic type inferred for a field. Inferred once per table from a single
/// sample row and then authoritative for every later stage — cleaning,
/// imputation and analytics never re-infer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Boolean,
    Date,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Text => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
        };
        f.write_str(name)
    }
}

/// Field name to inferred type. Fields absent from the sample row are absent
/// here and stay opaque to the stages driven by this map.
pub type FieldTypeMap = BTreeMap<String, FieldType>;
