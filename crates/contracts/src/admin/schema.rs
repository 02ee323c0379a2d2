//! Column metadata and the form field dispatch policy
//!
//! Everything the UI knows about a table comes from its column descriptors:
//! which columns are shown in the grid, which are editable, how each one is
//! labelled and which input control edits it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Conventional name of the identity column.
pub const IDENTITY_COLUMN: &str = "id";

/// Columns ending with this suffix are server-managed timestamps.
pub const TIMESTAMP_SUFFIX: &str = "_at";

/// Metadata describing one column of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub name: String,
    /// Storage type tag as reported by the backend (`text`, `jsonb`,
    /// `timestamp with time zone`, `USER-DEFINED`, ...).
    #[serde(rename = "type", alias = "data_type")]
    pub data_type: String,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default, alias = "default_value", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, alias = "max_length", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Key the backend expects for this column on create/update, when it
    /// differs from `name`.
    #[serde(default, alias = "external_name", skip_serializing_if = "Option::is_none")]
    pub external_name: Option<String>,
}

fn default_nullable() -> bool {
    true
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable,
            default_value: None,
            max_length: None,
            external_name: None,
        }
    }

    pub fn with_external_name(mut self, external: impl Into<String>) -> Self {
        self.external_name = Some(external.into());
        self
    }

    pub fn is_identity(&self) -> bool {
        self.name == IDENTITY_COLUMN
    }

    pub fn is_timestamp(&self) -> bool {
        self.name.ends_with(TIMESTAMP_SUFFIX)
    }

    pub fn is_required(&self) -> bool {
        !self.nullable && !self.is_identity()
    }

    /// Grid header text: `player_match_stats` -> `Player Match Stats`.
    pub fn header_label(&self) -> String {
        humanize(&self.name)
    }

    /// Form label text: `start_date` -> `START DATE`.
    pub fn form_label(&self) -> String {
        self.name.replace('_', " ").to_uppercase()
    }

    /// Whether the column is shown in create/edit forms.
    pub fn is_editable(&self) -> bool {
        !self.is_identity() && !self.is_timestamp()
    }
}

/// Table column metadata as returned by the schema endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    #[serde(default, alias = "table_name")]
    pub table_name: String,
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
}

/// Columns rendered in the grid: everything except the identity column.
pub fn header_columns(columns: &[ColumnDescriptor]) -> Vec<ColumnDescriptor> {
    columns.iter().filter(|c| !c.is_identity()).cloned().collect()
}

/// Columns rendered in create/edit forms.
pub fn form_columns(columns: &[ColumnDescriptor]) -> Vec<ColumnDescriptor> {
    columns.iter().filter(|c| c.is_editable()).cloned().collect()
}

/// Replaces underscores with spaces and capitalises each word.
pub fn humanize(name: &str) -> String {
    name.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Input control used to edit a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    /// Date-only picker; the raw string is stored unchanged.
    Date,
    /// Multi-line structured-text editor.
    Json,
    /// Enumerated ("USER-DEFINED") column, edited as plain text.
    UserDefined,
    Text,
}

impl FieldControl {
    /// Picks the control for a column. First matching rule wins; `None` means
    /// the column is excluded from forms.
    pub fn for_column(column: &ColumnDescriptor) -> Option<FieldControl> {
        if !column.is_editable() {
            return None;
        }
        Some(Self::for_type(&column.data_type))
    }

    pub fn for_type(type_tag: &str) -> FieldControl {
        let lower = type_tag.to_ascii_lowercase();
        if lower.contains("date") || lower.contains("timestamp") {
            FieldControl::Date
        } else if lower.contains("json") {
            FieldControl::Json
        } else if type_tag.contains("USER-DEFINED") {
            FieldControl::UserDefined
        } else {
            FieldControl::Text
        }
    }

    /// Text shown in the control for the current buffer value.
    pub fn display_value(&self, value: Option<&Value>) -> String {
        match self {
            FieldControl::Json => match value {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => "{}".to_string(),
                Some(other) => other.to_string(),
            },
            FieldControl::Date => {
                let text = plain_text(value);
                // Native date inputs only accept `yyyy-mm-dd`.
                match text.split_once(['T', ' ']) {
                    Some((date, _)) => date.to_string(),
                    None => text,
                }
            }
            FieldControl::UserDefined | FieldControl::Text => plain_text(value),
        }
    }

    /// Value written into the buffer for raw input text.
    ///
    /// Structured editors store the parsed value when the text is valid JSON
    /// and the raw text otherwise, so intermediate states never block typing.
    pub fn value_from_input(&self, input: String) -> Value {
        match self {
            FieldControl::Json => {
                serde_json::from_str::<Value>(&input).unwrap_or(Value::String(input))
            }
            _ => Value::String(input),
        }
    }

    pub fn placeholder(&self, column: &ColumnDescriptor) -> String {
        let readable = column.name.replace('_', " ");
        match self {
            FieldControl::Json => format!("Enter JSON for {}", readable),
            _ => format!("Enter {}", readable),
        }
    }
}

fn plain_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn col(name: &str, ty: &str) -> ColumnDescriptor {
        ColumnDescriptor::new(name, ty, true)
    }

    #[test]
    fn header_excludes_only_identity() {
        let columns = vec![
            col("id", "integer"),
            col("name", "text"),
            col("created_at", "timestamp"),
            col("identity", "text"),
        ];
        let names: Vec<_> = header_columns(&columns).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["name", "created_at", "identity"]);
    }

    #[test]
    fn form_excludes_identity_and_timestamps() {
        let columns = vec![
            col("id", "integer"),
            col("name", "text"),
            col("created_at", "timestamp"),
            col("updated_at", "timestamp"),
            col("start_date", "date"),
            col("metadata", "jsonb"),
        ];
        let names: Vec<_> = form_columns(&columns).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["name", "start_date", "metadata"]);
    }

    #[test]
    fn players_scenario_columns() {
        let columns = vec![
            ColumnDescriptor::new("id", "integer", false),
            ColumnDescriptor::new("name", "character varying", false),
            ColumnDescriptor::new("created_at", "timestamp without time zone", false),
        ];
        let header: Vec<_> = header_columns(&columns).into_iter().map(|c| c.name).collect();
        assert_eq!(header, vec!["name", "created_at"]);

        let form = form_columns(&columns);
        assert_eq!(form.len(), 1);
        assert_eq!(form[0].form_label(), "NAME");
        assert!(form[0].is_required());
    }

    #[test]
    fn control_dispatch_follows_type_tag() {
        assert_eq!(FieldControl::for_type("date"), FieldControl::Date);
        assert_eq!(
            FieldControl::for_type("timestamp with time zone"),
            FieldControl::Date
        );
        assert_eq!(FieldControl::for_type("jsonb"), FieldControl::Json);
        assert_eq!(FieldControl::for_type("USER-DEFINED"), FieldControl::UserDefined);
        assert_eq!(FieldControl::for_type("integer"), FieldControl::Text);

        assert_eq!(FieldControl::for_column(&col("id", "integer")), None);
        assert_eq!(FieldControl::for_column(&col("updated_at", "timestamp")), None);
        assert_eq!(
            FieldControl::for_column(&col("dob", "date")),
            Some(FieldControl::Date)
        );
    }

    #[test]
    fn identity_is_never_required() {
        let id = ColumnDescriptor::new("id", "uuid", false);
        assert!(!id.is_required());
        let optional = ColumnDescriptor::new("nickname", "text", true);
        assert!(!optional.is_required());
    }

    #[test]
    fn labels() {
        let c = col("player_match_stats", "text");
        assert_eq!(c.header_label(), "Player Match Stats");
        assert_eq!(c.form_label(), "PLAYER MATCH STATS");
    }

    #[test]
    fn json_editor_parses_or_keeps_raw() {
        let ctl = FieldControl::Json;
        assert_eq!(
            ctl.value_from_input(r#"{"espn": 42}"#.to_string()),
            json!({"espn": 42})
        );
        assert_eq!(
            ctl.value_from_input(r#"{"espn": 4"#.to_string()),
            Value::String(r#"{"espn": 4"#.to_string())
        );
    }

    #[test]
    fn json_editor_display() {
        let ctl = FieldControl::Json;
        assert_eq!(ctl.display_value(None), "{}");
        assert_eq!(ctl.display_value(Some(&json!("{\"a\""))), "{\"a\"");
        assert_eq!(ctl.display_value(Some(&json!({"a": 1}))), r#"{"a":1}"#);
    }

    #[test]
    fn date_and_text_binding() {
        assert_eq!(
            FieldControl::Date.display_value(Some(&json!("2024-01-01T00:00:00Z"))),
            "2024-01-01"
        );
        assert_eq!(
            FieldControl::Date.display_value(Some(&json!("2024-01-01 10:00:00"))),
            "2024-01-01"
        );
        assert_eq!(
            FieldControl::Date.value_from_input("2024-02-29".to_string()),
            json!("2024-02-29")
        );
        assert_eq!(FieldControl::Text.display_value(None), "");
        assert_eq!(FieldControl::Text.display_value(Some(&json!(42))), "42");
        assert_eq!(
            FieldControl::Text.value_from_input("{\"not\": \"parsed\"}".to_string()),
            json!("{\"not\": \"parsed\"}")
        );
    }

    #[test]
    fn descriptor_wire_format() {
        let c: ColumnDescriptor = serde_json::from_value(json!({
            "name": "external_ids",
            "type": "jsonb",
            "nullable": true,
            "externalName": "externalIds"
        }))
        .unwrap();
        assert_eq!(c.data_type, "jsonb");
        assert_eq!(c.external_name.as_deref(), Some("externalIds"));

        let c: ColumnDescriptor =
            serde_json::from_value(json!({"name": "title", "type": "text"})).unwrap();
        assert!(c.nullable);
    }
}
