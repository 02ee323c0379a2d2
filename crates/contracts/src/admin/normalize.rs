//! Field-name normalization applied to edit buffers before submission
//!
//! The backend expects a handful of columns under a different key than the
//! schema reports. The mapping starts from a fixed set of legacy renames and is
//! extended by any column descriptor that declares an `external_name`.

use super::record::EditBuffer;
use super::schema::ColumnDescriptor;

const LEGACY_RENAMES: [(&str, &str); 5] = [
    ("start_date", "startDate"),
    ("end_date", "endDate"),
    ("external_ids", "externalIds"),
    ("created_at", "createdAt"),
    ("updated_at", "updatedAt"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRenames {
    pairs: Vec<(String, String)>,
}

impl Default for FieldRenames {
    fn default() -> Self {
        Self {
            pairs: LEGACY_RENAMES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
}

impl FieldRenames {
    /// Legacy renames plus every declared `external_name`. A declared name
    /// overrides the legacy target for the same column.
    pub fn from_columns(columns: &[ColumnDescriptor]) -> Self {
        let mut renames = Self::default();
        for column in columns {
            if let Some(external) = column.external_name.as_deref() {
                if external.is_empty() || external == column.name {
                    continue;
                }
                match renames.pairs.iter_mut().find(|(from, _)| *from == column.name) {
                    Some(pair) => pair.1 = external.to_string(),
                    None => renames
                        .pairs
                        .push((column.name.clone(), external.to_string())),
                }
            }
        }
        renames
    }

    pub fn target(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(from, _)| from == key)
            .map(|(_, to)| to.as_str())
    }

    /// Returns a renamed copy of `buffer`. Keys absent from the buffer are
    /// ignored; keys without a rename pass through unchanged.
    pub fn apply(&self, buffer: &EditBuffer) -> EditBuffer {
        let mut out = EditBuffer::new();
        for (key, value) in buffer {
            let key = self.target(key).unwrap_or(key);
            out.insert(key.to_string(), value.clone());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn buffer(v: Value) -> EditBuffer {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn buffer_without_special_keys_is_unchanged() {
        let input = buffer(json!({"name": "Kohli", "team_id": 3}));
        assert_eq!(FieldRenames::default().apply(&input), input);
    }

    #[test]
    fn all_five_legacy_keys_are_renamed() {
        let input = buffer(json!({
            "start_date": "2024-01-01",
            "end_date": "2024-02-01",
            "external_ids": {"espn": 1},
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z",
        }));
        let out = FieldRenames::default().apply(&input);
        let mut keys: Vec<_> = out.keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["createdAt", "endDate", "externalIds", "startDate", "updatedAt"]
        );
        assert_eq!(out["externalIds"], json!({"espn": 1}));
    }

    #[test]
    fn partial_buffer_scenario() {
        let input = buffer(json!({"start_date": "2024-01-01", "title": "Final"}));
        let out = FieldRenames::default().apply(&input);
        assert_eq!(out, buffer(json!({"startDate": "2024-01-01", "title": "Final"})));
        // source buffer untouched
        assert!(input.contains_key("start_date"));
    }

    #[test]
    fn declared_external_names_extend_and_override() {
        let columns = vec![
            ColumnDescriptor::new("venue_id", "integer", true).with_external_name("venueId"),
            ColumnDescriptor::new("start_date", "date", true).with_external_name("startsOn"),
            ColumnDescriptor::new("title", "text", true).with_external_name("title"),
        ];
        let renames = FieldRenames::from_columns(&columns);
        assert_eq!(renames.target("venue_id"), Some("venueId"));
        assert_eq!(renames.target("start_date"), Some("startsOn"));
        assert_eq!(renames.target("end_date"), Some("endDate"));
        assert_eq!(renames.target("title"), None);

        let out = renames.apply(&buffer(json!({"venue_id": 4, "title": "Final"})));
        assert_eq!(out, buffer(json!({"venueId": 4, "title": "Final"})));
    }
}
