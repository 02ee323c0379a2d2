//! API calls of the Table Browser
//!
//! Thin async functions over `&dyn AdminApi`; all decisions live in
//! `state.rs`.

use super::state::{MutationKind, MutationRequest};
use contracts::admin::endpoints::DataPageQuery;
use contracts::admin::{AdminApi, Record, RecordId, TableSchema};
use contracts::shared::{ApiResponse, TablePage};
use serde_json::Value;

pub async fn fetch_schema(api: &dyn AdminApi, table: &str) -> ApiResponse<TableSchema> {
    api.get_table_schema(table).await
}

pub async fn fetch_page(api: &dyn AdminApi, query: &DataPageQuery) -> ApiResponse<TablePage> {
    log::debug!(
        "loading {} page {} (search: {:?})",
        query.table,
        query.page,
        query.search
    );
    api.get_table_data(query).await
}

pub async fn execute(api: &dyn AdminApi, request: &MutationRequest) -> ApiResponse<Value> {
    match &request.kind {
        MutationKind::Create => api.create_record(&request.table, &request.body).await,
        MutationKind::Update(id) => {
            api.update_record(&request.table, id, &request.body)
                .await
        }
        MutationKind::Delete(id) => api.delete_record(&request.table, id).await,
    }
}

pub async fn fetch_record(api: &dyn AdminApi, table: &str, id: &RecordId) -> ApiResponse<Record> {
    api.get_record(table, id).await
}


#[cfg(test)]
mod tests {
    use super::fake::FakeAdminApi;
    use super::*;
    use crate::table_browser::state::{Applied, FormTarget, Notice, Phase, TableBrowserState};
    use contracts::admin::ColumnDescriptor;
    use futures::executor::block_on;
    use serde_json::json;

    fn players_api() -> FakeAdminApi {
        FakeAdminApi {
            schema: Some(TableSchema {
                table_name: "players".into(),
                columns: vec![
                    ColumnDescriptor::new("id", "integer", false),
                    ColumnDescriptor::new("name", "text", false),
                    ColumnDescriptor::new("created_at", "timestamp", true),
                ],
            }),
            rows: vec![json!({"id": 1, "name": "Dhoni"}).as_object().cloned().unwrap()],
            ..Default::default()
        }
    }

    fn load(api: &FakeAdminApi, state: &mut TableBrowserState) {
        let req = state.begin_load();
        let schema = block_on(fetch_schema(api, &req.table));
        state.apply_schema(req.schema, schema);
        let data = block_on(fetch_page(api, &req.query));
        state.apply_data(req.data, data);
    }

    /// Submits, executes and finishes a mutation, running the reload if one
    /// is requested. Returns the notice.
    fn run_mutation(
        api: &FakeAdminApi,
        state: &mut TableBrowserState,
        request: MutationRequest,
    ) -> Notice {
        let response = block_on(execute(api, &request));
        let outcome = state.finish_mutation(&request, &response);
        if let Some(query) = outcome.reload {
            let ticket = state.begin_refresh();
            let data = block_on(fetch_page(api, &query));
            state.apply_data(ticket, data);
        }
        outcome.notice
    }

    #[test]
    fn players_create_posts_unchanged_body_and_reloads_once() {
        let api = players_api();
        let mut state = TableBrowserState::new("players", 10);
        load(&api, &mut state);
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(api.data_calls(), 1);

        state.open_create();
        state.set_field(FormTarget::Create, "name", json!("Kohli"));
        let request = state.submit_create().unwrap();
        let notice = run_mutation(&api, &mut state, request);

        assert_eq!(notice, Notice::Success("Record created successfully!".into()));
        let post = api.calls().into_iter().find(|c| c.method == "POST").unwrap();
        assert_eq!(post.path, "/crud/players");
        assert_eq!(post.body, Some(json!({"name": "Kohli"})));
        assert_eq!(api.data_calls(), 2);
        assert!(!state.create_open);
    }

    #[test]
    fn update_puts_normalized_body() {
        let api = players_api();
        let mut state = TableBrowserState::new("fixtures", 10);
        load(&api, &mut state);

        let row = json!({"id": 12, "start_date": "2024-01-01", "title": "Final"});
        assert!(state.open_edit(row.as_object().unwrap()));
        let request = state.submit_update().unwrap();
        run_mutation(&api, &mut state, request);

        let put = api.calls().into_iter().find(|c| c.method == "PUT").unwrap();
        assert_eq!(put.path, "/tables/fixtures/12");
        assert_eq!(
            put.body,
            Some(json!({"id": 12, "startDate": "2024-01-01", "title": "Final"}))
        );
        assert!(state.edit.is_none());
    }

    #[test]
    fn failed_mutation_does_not_reload() {
        let api = FakeAdminApi {
            fail_mutations: Some("duplicate key".into()),
            ..players_api()
        };
        let mut state = TableBrowserState::new("players", 10);
        load(&api, &mut state);

        state.open_create();
        state.set_field(FormTarget::Create, "name", json!("Kohli"));
        let request = state.submit_create().unwrap();
        let notice = run_mutation(&api, &mut state, request);

        assert_eq!(notice, Notice::Error("duplicate key".into()));
        assert_eq!(api.data_calls(), 1);
        assert!(state.create_open);
        assert_eq!(state.create_buffer["name"], json!("Kohli"));
    }

    #[test]
    fn delete_hits_record_path() {
        let api = players_api();
        let mut state = TableBrowserState::new("players", 10);
        load(&api, &mut state);

        let row = state.rows[0].clone();
        let request = state.request_delete(&row).unwrap();
        let notice = run_mutation(&api, &mut state, request);

        assert_eq!(notice, Notice::Success("Record deleted successfully!".into()));
        let delete = api.calls().into_iter().find(|c| c.method == "DELETE").unwrap();
        assert_eq!(delete.path, "/tables/players/1");
        assert_eq!(api.data_calls(), 2);
    }

    #[test]
    fn table_not_found_shows_error_without_rows() {
        let api = FakeAdminApi {
            fail_data: Some("table not found".into()),
            ..players_api()
        };
        let mut state = TableBrowserState::new("players", 10);
        load(&api, &mut state);

        assert_eq!(state.phase(), Phase::Error);
        assert_eq!(state.error.as_deref(), Some("table not found"));
        assert!(state.rows.is_empty());
    }

    #[test]
    fn search_requests_first_page_with_filters() {
        let api = players_api();
        let mut state = TableBrowserState::new("players", 10);
        load(&api, &mut state);
        state.go_to_page(3);
        state.set_search("Kohli");
        load(&api, &mut state);

        let last = api.calls().into_iter().filter(|c| c.path.starts_with("/crud/")).last().unwrap();
        assert_eq!(
            last.path,
            "/crud/players?page=1&limit=10&filters=%7B%22search%22%3A%22Kohli%22%7D"
        );
    }

    #[test]
    fn record_view_fetches_single_record() {
        let api = players_api();
        let mut state = TableBrowserState::new("players", 10);
        load(&api, &mut state);

        let row = state.rows[0].clone();
        let id = state.open_record_view(&row).unwrap();
        let response = block_on(fetch_record(&api, "players", &id));
        assert_eq!(state.apply_record(&id, response), Applied::Ok);
        assert!(api.calls().iter().any(|c| c.path == "/tables/players/1"));
    }
}
