//! Response envelope shared by every admin API endpoint
//!
//! The backend wraps all payloads in `{ success, data, message?, error? }`.
//! Callers never see a `Result`: transport, status, parse and application
//! failures are all collapsed into the same `success: false` shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::pagination::Pagination;

/// Failure kinds recognised by the client.
///
/// `Display` yields the user-facing message only, so the envelope's `error`
/// field never carries a kind prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Malformed(String),
    #[error("{0}")]
    Application(String),
}

impl ApiError {
    /// Builds a status error, preferring the body's `message`, then `error`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let from_body = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["message", "error"].iter().find_map(|key| {
                    v.get(*key)
                        .and_then(|m| m.as_str())
                        .filter(|m| !m.is_empty())
                        .map(str::to_string)
                })
            });

        ApiError::Status {
            status,
            message: from_body
                .unwrap_or_else(|| format!("Request failed with status {}", status)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Only present on data-page responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            pagination: None,
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.to_string()),
            pagination: None,
        }
    }

    /// The reported error, or `fallback` when the failure carried no message.
    pub fn error_message(&self, fallback: &str) -> String {
        self.error
            .clone()
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
            error: self.error,
            pagination: self.pagination,
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Parses a JSON body into an envelope.
    ///
    /// A body that does not match the envelope is `Malformed`; a well-formed
    /// body reporting `success: false` becomes an `Application` failure.
    pub fn decode(body: serde_json::Value) -> Self {
        match serde_json::from_value::<ApiResponse<T>>(body) {
            Ok(resp) if resp.success => resp,
            Ok(resp) => {
                let message = resp
                    .error
                    .filter(|e| !e.is_empty())
                    .or(resp.message)
                    .unwrap_or_else(|| "Request was not successful".to_string());
                ApiResponse::failure(ApiError::Application(message))
            }
            Err(e) => ApiResponse::failure(ApiError::Malformed(e.to_string())),
        }
    }
}

impl<T> From<ApiError> for ApiResponse<T> {
    fn from(error: ApiError) -> Self {
        ApiResponse::failure(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::record::Record;
    use serde_json::json;

    #[test]
    fn status_error_prefers_body_message() {
        let err = ApiError::from_status(404, r#"{"message":"table not found"}"#);
        assert_eq!(err.to_string(), "table not found");

        let err = ApiError::from_status(500, r#"{"error":"boom"}"#);
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn status_error_falls_back_to_code() {
        let err = ApiError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status 502");
        assert!(matches!(err, ApiError::Status { status: 502, .. }));
    }

    #[test]
    fn failure_has_no_data() {
        let resp: ApiResponse<Vec<String>> =
            ApiResponse::failure(ApiError::Transport("connection refused".into()));
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn decode_keeps_successful_payload() {
        let resp: ApiResponse<Vec<String>> =
            ApiResponse::decode(json!({"success": true, "data": ["players", "teams"]}));
        assert!(resp.success);
        assert_eq!(resp.data.unwrap(), vec!["players", "teams"]);
    }

    #[test]
    fn decode_collapses_application_failure() {
        let resp: ApiResponse<serde_json::Value> =
            ApiResponse::decode(json!({"success": false, "data": null, "error": "table not found"}));
        assert!(!resp.success);
        assert_eq!(resp.error_message("fallback"), "table not found");

        let resp: ApiResponse<serde_json::Value> =
            ApiResponse::decode(json!({"success": false, "message": "duplicate key"}));
        assert_eq!(resp.error_message("fallback"), "duplicate key");
    }

    #[test]
    fn decode_without_data_field() {
        let resp: ApiResponse<Record> = ApiResponse::decode(json!({"success": true}));
        assert!(resp.success);
        assert!(resp.data.is_none());
    }

    #[test]
    fn decode_tolerates_partial_pagination() {
        let resp: ApiResponse<Vec<Record>> = ApiResponse::decode(json!({
            "success": true,
            "data": [{"id": 1, "name": "Kohli"}],
            "pagination": {"page": 1, "limit": 10, "total": 1}
        }));
        assert!(resp.success, "{:?}", resp.error);
        assert_eq!(resp.data.map(|rows| rows.len()), Some(1));
        let pagination = resp.pagination.unwrap();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.total_pages, 1);
        assert!(!pagination.has_next_page);
    }

    #[test]
    fn decode_rejects_non_envelope() {
        let resp: ApiResponse<Vec<String>> = ApiResponse::decode(json!(["not", "an", "envelope"]));
        assert!(!resp.success);
        assert!(resp.error.is_some());
    }

    #[test]
    fn error_message_uses_fallback_when_empty() {
        let mut resp: ApiResponse<()> = ApiResponse::failure(ApiError::Application(String::new()));
        assert_eq!(resp.error_message("Failed to load table data"), "Failed to load table data");
        resp.error = None;
        assert_eq!(resp.error_message("Failed to load table data"), "Failed to load table data");
    }
}
