use crate::app_shell::AppShell;
use crate::config::ApiConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api::{AdminClient, HttpAdminApi};
use crate::shared::modal::ModalStackService;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());
    provide_context(ModalStackService::new());
    provide_context(AdminClient::new(HttpAdminApi::new(ApiConfig::from_env())));

    view! {
        <AppShell />
        <ToastHost />
    }
}
