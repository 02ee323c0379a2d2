//! `gloo-net` implementation of the admin API
//!
//! All requests carry `Content-Type: application/json`. Failures are logged
//! once here and handed back as `success: false` envelopes.

use async_trait::async_trait;
use contracts::admin::endpoints::{self, DataPageQuery};
use contracts::admin::{AdminApi, Record, RecordId, TableSchema};
use contracts::shared::{ApiError, ApiResponse, TablePage};
use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;

#[derive(Debug, Clone)]
pub struct HttpAdminApi {
    config: ApiConfig,
}

impl HttpAdminApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Record>,
    ) -> Result<Value, ApiError> {
        let url = self.config.url(path);
        log::debug!("{} {}", method, url);

        let builder = RequestBuilder::new(&url)
            .method(method)
            .header("Content-Type", "application/json");
        let request = match body {
            Some(record) => builder.json(record),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let ok = response.ok();
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        if !ok {
            return Err(ApiError::from_status(status, &text));
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Record>,
    ) -> ApiResponse<T> {
        let response = match self.send(method, path, body).await {
            Ok(value) => ApiResponse::decode(value),
            Err(e) => ApiResponse::failure(e),
        };
        if let Some(err) = response.error.as_deref().filter(|_| !response.success) {
            log::error!("API request failed: {}", err);
        }
        response
    }
}

#[async_trait(?Send)]
impl AdminApi for HttpAdminApi {
    async fn list_tables(&self) -> ApiResponse<Vec<String>> {
        self.request(Method::GET, &endpoints::tables(), None).await
    }

    async fn get_table_schema(&self, table: &str) -> ApiResponse<TableSchema> {
        self.request(Method::GET, &endpoints::schema_columns(table), None)
            .await
    }

    async fn get_table_data(&self, query: &DataPageQuery) -> ApiResponse<TablePage> {
        let mut response: ApiResponse<Value> = self
            .request(Method::GET, &query.path_and_query(), None)
            .await;
        let pagination = response.pagination.take();
        response.map(|data| TablePage::from_payload(data, pagination))
    }

    async fn create_record(&self, table: &str, record: &Record) -> ApiResponse<Value> {
        self.request(Method::POST, &endpoints::crud(table), Some(record))
            .await
    }

    async fn update_record(
        &self,
        table: &str,
        id: &RecordId,
        record: &Record,
    ) -> ApiResponse<Value> {
        self.request(Method::PUT, &endpoints::record(table, id), Some(record))
            .await
    }

    async fn delete_record(&self, table: &str, id: &RecordId) -> ApiResponse<Value> {
        self.request(Method::DELETE, &endpoints::record(table, id), None)
            .await
    }

    async fn get_record(&self, table: &str, id: &RecordId) -> ApiResponse<Record> {
        self.request(Method::GET, &endpoints::record(table, id), None)
            .await
    }
}
