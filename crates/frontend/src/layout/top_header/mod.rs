//! Top bar: sidebar toggle and application title.

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::TabRoute;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span
                    class="top-header__title"
                    on:click=move |_| ctx.open_route(&TabRoute::Dashboard)
                >
                    "Admin Dashboard"
                </span>
            </div>
        </div>
    }
}
