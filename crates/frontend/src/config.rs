//! Client configuration
//!
//! The admin API base URL is resolved once at start-up:
//! 1. `localStorage["admin_api_url"]` (runtime override, handy in dev tools)
//! 2. `ADMIN_API_URL` at compile time
//! 3. `http://localhost:3001/admin`

use web_sys::window;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/admin";
const STORAGE_KEY: &str = "admin_api_url";

/// Rows per page in the table browser. Fixed for the session.
pub const PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// First non-empty candidate wins, falling back to the local default.
    pub fn resolve(runtime: Option<String>, build_time: Option<&str>) -> Self {
        let chosen = runtime
            .filter(|v| !v.trim().is_empty())
            .or_else(|| {
                build_time
                    .filter(|v| !v.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(&chosen)
    }

    pub fn from_env() -> Self {
        let config = Self::resolve(stored_override(), option_env!("ADMIN_API_URL"));
        log::info!("Admin API base URL: {}", config.base_url);
        config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn stored_override() -> Option<String> {
    window()?.local_storage().ok()??.get_item(STORAGE_KEY).ok()?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_when_nothing_configured() {
        assert_eq!(ApiConfig::resolve(None, None).base_url, DEFAULT_API_URL);
        assert_eq!(
            ApiConfig::resolve(Some("  ".into()), Some("")).base_url,
            DEFAULT_API_URL
        );
    }

    #[test]
    fn runtime_override_wins() {
        let config = ApiConfig::resolve(
            Some("https://admin.example.com/api/".into()),
            Some("http://build-time"),
        );
        assert_eq!(config.base_url, "https://admin.example.com/api");
        assert_eq!(config.url("/tables"), "https://admin.example.com/api/tables");
    }

    #[test]
    fn build_time_value_used_without_override() {
        let config = ApiConfig::resolve(None, Some("http://10.0.0.5:3001/admin"));
        assert_eq!(config.base_url, "http://10.0.0.5:3001/admin");
    }
}
