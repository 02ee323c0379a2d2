use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::schema::IDENTITY_COLUMN;

/// A table row: column name -> value. Its shape is defined by the table's
/// column descriptors only.
pub type Record = Map<String, Value>;

/// Pending values of a create or edit form.
pub type EditBuffer = Map<String, Value>;

/// Identity of a record, taken from its `id` column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    pub fn of(record: &Record) -> Option<RecordId> {
        match record.get(IDENTITY_COLUMN)? {
            Value::Number(n) => n
                .as_i64()
                .map(RecordId::Int)
                .or_else(|| Some(RecordId::Text(n.to_string()))),
            Value::String(s) if !s.is_empty() => Some(RecordId::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Grid cell text. Absent, null and empty values render as `-`.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) if s.is_empty() => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> Record {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn record_id_from_number_or_text() {
        assert_eq!(RecordId::of(&record(json!({"id": 12}))), Some(RecordId::Int(12)));
        assert_eq!(
            RecordId::of(&record(json!({"id": "a1b2"}))),
            Some(RecordId::Text("a1b2".into()))
        );
        assert_eq!(RecordId::of(&record(json!({"name": "x"}))), None);
        assert_eq!(RecordId::of(&record(json!({"id": null}))), None);
        assert_eq!(RecordId::Int(7).to_string(), "7");
    }

    #[test]
    fn cell_text_rendering() {
        assert_eq!(cell_text(None), "-");
        assert_eq!(cell_text(Some(&json!(null))), "-");
        assert_eq!(cell_text(Some(&json!(""))), "-");
        assert_eq!(cell_text(Some(&json!("Kohli"))), "Kohli");
        assert_eq!(cell_text(Some(&json!(0))), "0");
        assert_eq!(cell_text(Some(&json!(false))), "false");
        assert_eq!(cell_text(Some(&json!({"espn": 1}))), r#"{"espn":1}"#);
    }
}
