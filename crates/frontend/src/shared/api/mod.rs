//! Admin API access for components
//!
//! The client is constructed once in `App` and injected through context, so
//! components and tests never reach for a process-wide singleton.

mod http;

pub use http::HttpAdminApi;

use contracts::admin::AdminApi;
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct AdminClient(pub Arc<dyn AdminApi>);

impl AdminClient {
    pub fn new(api: impl AdminApi + 'static) -> Self {
        Self(Arc::new(api))
    }

    pub fn api(&self) -> Arc<dyn AdminApi> {
        self.0.clone()
    }
}

pub fn use_admin_client() -> AdminClient {
    use_context::<AdminClient>().expect("AdminClient not provided in context")
}
