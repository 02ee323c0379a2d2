//! Sidebar: dashboard link plus one collapsible group per category

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::TabRoute;
use crate::shared::icons::icon;
use contracts::admin::categories::{self, Category};
use contracts::admin::schema::humanize;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let expanded_groups = RwSignal::new(Vec::<&'static str>::new());
    let dashboard_key = TabRoute::Dashboard.key();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__section">"Main"</div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || ctx.is_active(&dashboard_key)
                style:padding-left="12px"
                on:click=move |_| ctx.open_route(&TabRoute::Dashboard)
            >
                <div class="app-sidebar__item-content">
                    {icon("home")}
                    <span>"Dashboard"</span>
                </div>
            </div>

            <div class="app-sidebar__section">"Data Management"</div>
            {categories::all()
                .iter()
                .map(|category| view! { <CategoryGroup category=category expanded_groups=expanded_groups /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn CategoryGroup(
    category: &'static Category,
    expanded_groups: RwSignal<Vec<&'static str>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let group_id = category.key;
    let category_route = TabRoute::Category(category.key.to_string());
    let category_key = category_route.key();

    let is_expanded = move || expanded_groups.get().contains(&group_id);
    let toggle = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        expanded_groups.update(|items| {
            if let Some(pos) = items.iter().position(|x| *x == group_id) {
                items.remove(pos);
            } else {
                items.push(group_id);
            }
        });
    };

    view! {
        <div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || ctx.is_active(&category_key)
                style:padding-left="12px"
                on:click=move |_| ctx.open_route(&category_route)
            >
                <div class="app-sidebar__item-content">
                    {icon(category.icon)}
                    <span>{category.name}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=is_expanded
                    on:click=toggle
                >
                    {icon("chevron-right")}
                </div>
            </div>

            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {category
                        .tables
                        .iter()
                        .map(|table| {
                            let route = TabRoute::table(category.key, table);
                            let key = route.key();
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || ctx.is_active(&key)
                                    style:padding-left="10px"
                                    on:click=move |_| ctx.open_route(&route)
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon("database")}
                                        <span>{humanize(table)}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
