//! Tab key → view. Every page reachable from a tab is wired here.

use super::route::TabRoute;
use crate::layout::global_context::AppGlobalContext;
use crate::pages::{CategoryPage, DashboardPage};
use crate::table_browser::TableBrowser;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content for `key`, or a placeholder when the key is not a
/// known route.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match TabRoute::parse(key) {
        Some(TabRoute::Dashboard) => view! { <DashboardPage /> }.into_any(),
        Some(TabRoute::Category(category)) => {
            view! { <CategoryPage category_key=category /> }.into_any()
        }
        Some(TabRoute::Table {
            category,
            table,
            create,
        }) => {
            let back_to = TabRoute::Category(category.clone());
            let on_back = Callback::new(move |_| {
                tabs_store.close_tab(&key_for_close);
                tabs_store.open_route(&back_to);
            });
            view! {
                <TableBrowser
                    category_key=category
                    table_name=table
                    open_create=create
                    on_back=on_back
                />
            }
            .into_any()
        }
        None => {
            log!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Page not found"</div> }.into_any()
        }
    }
}
