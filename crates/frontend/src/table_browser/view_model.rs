use super::model;
use super::state::{Applied, DataTicket, FormTarget, MutationRequest, Notice, TableBrowserState};
use crate::config::PAGE_SIZE;
use crate::shared::api::{use_admin_client, AdminClient};
use crate::shared::toast::{use_toasts, ToastService};
use contracts::admin::endpoints::DataPageQuery;
use contracts::admin::{AdminApi, Record};
use leptos::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

/// ViewModel of one Table Browser instance
#[derive(Clone, Copy)]
pub struct TableBrowserViewModel {
    pub state: RwSignal<TableBrowserState>,
    client: StoredValue<AdminClient>,
    toasts: ToastService,
}

impl TableBrowserViewModel {
    pub fn new(table: String) -> Self {
        Self {
            state: RwSignal::new(TableBrowserState::new(table, PAGE_SIZE)),
            client: StoredValue::new(use_admin_client()),
            toasts: use_toasts(),
        }
    }

    fn api(&self) -> Arc<dyn AdminApi> {
        self.client.with_value(|client| client.api())
    }

    /// Full load: schema and data page requested concurrently.
    pub fn load(&self) {
        let Some(request) = self.state.try_update(|s| s.begin_load()) else {
            return;
        };
        let this = *self;

        let api = self.api();
        let table = request.table.clone();
        let schema_ticket = request.schema;
        spawn_local(async move {
            let response = model::fetch_schema(api.as_ref(), &table).await;
            this.state
                .try_update(|s| s.apply_schema(schema_ticket, response));
        });

        self.fetch_data(request.data, request.query);
    }

    /// Silent data reload of `query`; the phase stays as it is.
    fn refresh(&self, query: DataPageQuery) {
        if let Some(ticket) = self.state.try_update(|s| s.begin_refresh()) {
            self.fetch_data(ticket, query);
        }
    }

    fn fetch_data(&self, ticket: DataTicket, query: DataPageQuery) {
        let this = *self;
        let api = self.api();
        spawn_local(async move {
            let response = model::fetch_page(api.as_ref(), &query).await;
            if let Some(Applied::Failed(message)) =
                this.state.try_update(|s| s.apply_data(ticket, response))
            {
                this.toasts.error(message);
            }
        });
    }

    pub fn set_search(&self, term: String) {
        if self.state.try_update(|s| s.set_search(term)) == Some(true) {
            self.load();
        }
    }

    pub fn go_to_page(&self, page: u32) {
        if self.state.try_update(|s| s.go_to_page(page)) == Some(true) {
            self.load();
        }
    }

    // ── dialogs ────────────────────────────────────────────────────────────

    pub fn open_create(&self) {
        self.state.update(|s| s.open_create());
    }

    pub fn close_create(&self) {
        self.state.update(|s| s.close_create());
    }

    pub fn open_edit(&self, record: &Record) {
        self.state.update(|s| {
            if !s.open_edit(record) {
                log::warn!("{}: record has no id, cannot edit", s.table);
            }
        });
    }

    pub fn close_edit(&self) {
        self.state.update(|s| s.close_edit());
    }

    pub fn set_field(&self, target: FormTarget, name: &str, value: Value) {
        self.state.update(|s| s.set_field(target, name, value));
    }

    // ── commands ───────────────────────────────────────────────────────────

    pub fn submit_create(&self) {
        if let Some(request) = self.state.with_untracked(|s| s.submit_create()) {
            self.run_mutation(request);
        }
    }

    pub fn submit_update(&self) {
        if let Some(request) = self.state.with_untracked(|s| s.submit_update()) {
            self.run_mutation(request);
        }
    }

    /// Asks the browser for confirmation before deleting.
    pub fn delete(&self, record: &Record) {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to delete this record?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        if let Some(request) = self.state.with_untracked(|s| s.request_delete(record)) {
            self.run_mutation(request);
        }
    }

    fn run_mutation(&self, request: MutationRequest) {
        let this = *self;
        let api = self.api();
        spawn_local(async move {
            let response = model::execute(api.as_ref(), &request).await;
            let Some(outcome) = this
                .state
                .try_update(|s| s.finish_mutation(&request, &response))
            else {
                return;
            };
            log::debug!("{:?} on {}: {:?}", request.kind, request.table, outcome.notice);
            match outcome.notice {
                Notice::Success(message) => this.toasts.success(message),
                Notice::Error(message) => this.toasts.error(message),
            }
            if let Some(query) = outcome.reload {
                this.refresh(query);
            }
        });
    }

    pub fn view_record(&self, record: &Record) {
        let Some(Some(id)) = self.state.try_update(|s| s.open_record_view(record)) else {
            return;
        };
        let this = *self;
        let api = self.api();
        let table = self.state.with_untracked(|s| s.table.clone());
        spawn_local(async move {
            let response = model::fetch_record(api.as_ref(), &table, &id).await;
            this.state.try_update(|s| s.apply_record(&id, response));
        });
    }

    pub fn close_record_view(&self) {
        self.state.update(|s| s.close_record_view());
    }
}
