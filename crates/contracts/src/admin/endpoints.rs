//! Admin API paths, relative to the configured base URL.

use serde_json::json;

use super::record::RecordId;

/// `GET /tables`
pub fn tables() -> String {
    "/tables".to_string()
}

/// `GET /schema/tables/{table}/columns`
pub fn schema_columns(table: &str) -> String {
    format!("/schema/tables/{}/columns", urlencoding::encode(table))
}

/// `POST /crud/{table}` (create) and the base of the data-page query.
pub fn crud(table: &str) -> String {
    format!("/crud/{}", urlencoding::encode(table))
}

/// `GET | PUT | DELETE /tables/{table}/{id}`
pub fn record(table: &str, id: &RecordId) -> String {
    format!(
        "/tables/{}/{}",
        urlencoding::encode(table),
        urlencoding::encode(&id.to_string())
    )
}

/// Parameters of a data-page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPageQuery {
    pub table: String,
    /// 1-based.
    pub page: u32,
    pub limit: u32,
    pub search: String,
}

impl DataPageQuery {
    /// `/crud/{table}?page=..&limit=..[&filters=..]`. The `filters` value is
    /// the JSON object `{"search": term}` and is omitted for an empty term.
    pub fn path_and_query(&self) -> String {
        let mut url = format!("{}?page={}&limit={}", crud(&self.table), self.page, self.limit);
        if !self.search.is_empty() {
            let filters = json!({ "search": self.search }).to_string();
            url.push_str("&filters=");
            url.push_str(&urlencoding::encode(&filters));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths() {
        assert_eq!(tables(), "/tables");
        assert_eq!(schema_columns("players"), "/schema/tables/players/columns");
        assert_eq!(crud("players"), "/crud/players");
        assert_eq!(record("players", &RecordId::Int(5)), "/tables/players/5");
        assert_eq!(
            record("players", &RecordId::Text("a b".into())),
            "/tables/players/a%20b"
        );
    }

    #[test]
    fn data_page_without_search() {
        let q = DataPageQuery {
            table: "players".into(),
            page: 1,
            limit: 10,
            search: String::new(),
        };
        assert_eq!(q.path_and_query(), "/crud/players?page=1&limit=10");
    }

    #[test]
    fn data_page_with_search() {
        let q = DataPageQuery {
            table: "players".into(),
            page: 3,
            limit: 10,
            search: "Kohli".into(),
        };
        assert_eq!(
            q.path_and_query(),
            "/crud/players?page=3&limit=10&filters=%7B%22search%22%3A%22Kohli%22%7D"
        );
    }
}
