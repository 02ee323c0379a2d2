use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::admin::record::Record;

/// Server-side pagination state as reported by the data endpoint.
///
/// Missing fields take the single-page defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    #[serde(alias = "total_pages")]
    pub total_pages: u32,
    #[serde(alias = "has_next_page")]
    pub has_next_page: bool,
    #[serde(alias = "has_previous_page")]
    pub has_previous_page: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            total_pages: 1,
            has_next_page: false,
            has_previous_page: false,
        }
    }
}

/// One page of rows for a table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TablePage {
    pub rows: Vec<Record>,
    pub pagination: Pagination,
}

impl TablePage {
    /// Builds a page from the envelope's `data` and top-level `pagination`.
    ///
    /// Rows are taken from an array payload, or from an object payload's
    /// `data`/`rows` array (whose nested `pagination` wins over the
    /// envelope's). Any other shape yields an empty page.
    pub fn from_payload(data: Value, envelope_pagination: Option<Pagination>) -> Self {
        let (rows, nested) = match data {
            Value::Array(items) => (items, None),
            Value::Object(mut obj) => {
                let nested = obj
                    .remove("pagination")
                    .and_then(|p| serde_json::from_value::<Pagination>(p).ok());
                let rows = match obj.remove("data").or_else(|| obj.remove("rows")) {
                    Some(Value::Array(items)) => items,
                    _ => Vec::new(),
                };
                (rows, nested)
            }
            _ => (Vec::new(), None),
        };

        Self {
            rows: rows
                .into_iter()
                .filter_map(|row| match row {
                    Value::Object(map) => Some(map),
                    _ => None,
                })
                .collect(),
            pagination: nested.or(envelope_pagination).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_payload_with_envelope_pagination() {
        let pagination = Pagination {
            page: 2,
            limit: 10,
            total_pages: 5,
            has_next_page: true,
            has_previous_page: true,
        };
        let page = TablePage::from_payload(
            json!([{"id": 1, "name": "Kohli"}, {"id": 2, "name": "Root"}]),
            Some(pagination),
        );
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.rows[1]["name"], "Root");
        assert_eq!(page.pagination, pagination);
    }

    #[test]
    fn missing_pagination_defaults() {
        let page = TablePage::from_payload(json!([]), None);
        assert!(page.rows.is_empty());
        assert_eq!(page.pagination, Pagination::default());
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.limit, 10);
        assert_eq!(page.pagination.total_pages, 1);
        assert!(!page.pagination.has_next_page);
        assert!(!page.pagination.has_previous_page);
    }

    #[test]
    fn nested_payload_is_accepted() {
        let page = TablePage::from_payload(
            json!({
                "data": [{"id": 7}],
                "pagination": {"page": 3, "limit": 10, "totalPages": 3,
                               "hasNextPage": false, "hasPreviousPage": true}
            }),
            None,
        );
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.pagination.page, 3);
        assert!(page.pagination.has_previous_page);
    }

    #[test]
    fn partial_nested_pagination_keeps_known_fields() {
        let page = TablePage::from_payload(
            json!({"data": [{"id": 1}], "pagination": {"page": 2, "hasPreviousPage": true}}),
            None,
        );
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.limit, 10);
        assert_eq!(page.pagination.total_pages, 1);
        assert!(page.pagination.has_previous_page);
    }

    #[test]
    fn unexpected_shape_yields_no_rows() {
        let page = TablePage::from_payload(json!("oops"), None);
        assert!(page.rows.is_empty());

        let page = TablePage::from_payload(json!([1, 2, {"id": 3}]), None);
        assert_eq!(page.rows.len(), 1);
    }
}
