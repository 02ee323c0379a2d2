//! Service contract of the admin backend
//!
//! Implementations never fail with `Err`: every transport, status, parse or
//! application failure comes back as `ApiResponse { success: false, .. }`.

use async_trait::async_trait;
use serde_json::Value;

use super::endpoints::DataPageQuery;
use super::record::{Record, RecordId};
use super::schema::TableSchema;
use crate::shared::api_response::ApiResponse;
use crate::shared::pagination::TablePage;

#[async_trait(?Send)]
pub trait AdminApi: Send + Sync {
    /// `GET /tables`
    async fn list_tables(&self) -> ApiResponse<Vec<String>>;

    /// `GET /schema/tables/{table}/columns`
    async fn get_table_schema(&self, table: &str) -> ApiResponse<TableSchema>;

    /// `GET /crud/{table}?page&limit&filters`
    async fn get_table_data(&self, query: &DataPageQuery) -> ApiResponse<TablePage>;

    /// `POST /crud/{table}`
    async fn create_record(&self, table: &str, record: &Record) -> ApiResponse<Value>;

    /// `PUT /tables/{table}/{id}`
    async fn update_record(&self, table: &str, id: &RecordId, record: &Record)
        -> ApiResponse<Value>;

    /// `DELETE /tables/{table}/{id}`
    async fn delete_record(&self, table: &str, id: &RecordId) -> ApiResponse<Value>;

    /// `GET /tables/{table}/{id}`
    async fn get_record(&self, table: &str, id: &RecordId) -> ApiResponse<Record>;
}
