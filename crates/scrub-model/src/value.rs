#![deny(unsafe_code)]

use std::fmt;

use chrono::NaiveDate;
use serde::ser::{Serialize, Serializer};

/// A dynamic cell value.
///
/// Raw input enters the pipeline as `Text` (CSV) or as whatever scalar the
/// source format carried (JSON). Cleaning coerces values into the canonical
/// variant for their inferred field type; anything unparseable degrades to
/// `Null` rather than failing the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value: `Number` directly, numeric `Text` by
    /// parsing. Booleans and dates are never numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Date view: `Date` directly; `Text` is not parsed here because the
    /// strict-format list lives with the transform stages.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Canonical string form: `Null` is empty, dates are ISO `YYYY-MM-DD`,
    /// whole numbers print without a trailing `.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::Bool(b) => write!(f, "{b}"),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Date(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_canonical() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Number(1200.0).to_string(), "1200");
        assert_eq!(Value::Number(0.5).to_string(), "0.5");
        assert_eq!(Value::Bool(true).to_string(), "true");
        let d = NaiveDate::from_ymd_opt(2023, 3, 5).unwrap();
        assert_eq!(Value::Date(d).to_string(), "2023-03-05");
    }

    #[test]
    fn as_number_coerces_numeric_text_only() {
        assert_eq!(Value::Number(12.0).as_number(), Some(12.0));
        assert_eq!(Value::Text(" 12.5 ".into()).as_number(), Some(12.5));
        assert_eq!(Value::Text("twelve".into()).as_number(), None);
        assert_eq!(Value::Bool(true).as_number(), None);
        assert_eq!(Value::Null.as_number(), None);
    }

    #[test]
    fn typed_views_match_their_variant_only() {
        let d = NaiveDate::from_ymd_opt(2021, 1, 2).unwrap();
        assert_eq!(Value::Date(d).as_date(), Some(d));
        // text is not parsed here; date parsing belongs to the transform stages
        assert_eq!(Value::Text("2021-01-02".into()).as_date(), None);
        assert_eq!(Value::Text("hi".into()).as_text(), Some("hi"));
        assert_eq!(Value::Number(1.0).as_text(), None);
        assert_eq!(Value::Null.as_date(), None);
    }

    #[test]
    fn serializes_to_json_scalars() {
        let d = NaiveDate::from_ymd_opt(2021, 1, 2).unwrap();
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::Bool(false)).unwrap(), "false");
        assert_eq!(
            serde_json::to_string(&Value::Date(d)).unwrap(),
            "\"2021-01-02\""
        );
    }
}
