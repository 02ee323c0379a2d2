//! Root layout: sidebar on the left, tabbed pages in the centre.
//!
//! Tabs are synced with the URL (`?active=...`) on start-up.

use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::use_app_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store = use_app_context();

    // Runs once when the shell is created.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}
