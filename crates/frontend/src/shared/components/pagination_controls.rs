use crate::shared::icons::icon;
use contracts::shared::Pagination;
use leptos::prelude::*;

/// Previous / next controls driven by the server-reported pagination.
///
/// Pages are 1-based. Buttons are enabled only when the server says there is
/// a neighbouring page; nothing is validated client-side.
#[component]
pub fn PaginationControls(
    /// Last pagination reported by the data endpoint
    #[prop(into)]
    pagination: Signal<Pagination>,

    /// Callback with the requested 1-based page
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let has_prev = move || pagination.get().has_previous_page;
    let has_next = move || pagination.get().has_next_page;

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !has_prev()
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_previous_page {
                        on_page_change.run(p.page.saturating_sub(1).max(1));
                    }
                }
                disabled=move || !has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
                <span>"Previous"</span>
            </button>
            <span class="pagination-info">
                {move || {
                    let p = pagination.get();
                    format!("Page {} of {}", p.page, p.total_pages.max(1))
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_next_page {
                        on_page_change.run(p.page + 1);
                    }
                }
                disabled=move || !has_next()
                title="Next page"
            >
                <span>"Next"</span>
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_next_page {
                        on_page_change.run(p.total_pages.max(1));
                    }
                }
                disabled=move || !has_next()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
