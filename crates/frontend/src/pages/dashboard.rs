//! Dashboard home: category cards and the backend's table list.

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::TabRoute;
use crate::shared::api::use_admin_client;
use crate::shared::icons::icon;
use contracts::admin::categories::{self, Category};
use contracts::admin::schema::humanize;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABLES_FALLBACK: &str = "Failed to load tables";
const UNCATEGORIZED: &str = "Uncategorized";

/// A backend table with its owning category, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    pub table: String,
    pub category: Option<&'static Category>,
}

impl TableEntry {
    pub fn category_label(&self) -> &'static str {
        self.category.map(|c| c.name).unwrap_or(UNCATEGORIZED)
    }
}

pub fn classify_tables(tables: Vec<String>) -> Vec<TableEntry> {
    tables
        .into_iter()
        .map(|table| TableEntry {
            category: categories::category_for_table(&table),
            table,
        })
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let client = use_admin_client();

    let tables = RwSignal::new(Vec::<TableEntry>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        let response = client.api().list_tables().await;
        match response.data.clone().filter(|_| response.success) {
            Some(names) => {
                let _ = tables.try_set(classify_tables(names));
            }
            None => {
                let _ = error.try_set(Some(response.error_message(TABLES_FALLBACK)));
            }
        }
        let _ = loading.try_set(false);
    });

    view! {
        <div class="page dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <div>
                        <h1 class="page__title">"Dashboard"</h1>
                        <p class="page__subtitle">"Welcome to the Admin Panel - manage your data"</p>
                    </div>
                </div>
            </div>

            <div class="page__content">
                <div class="dashboard__grid">
                    {categories::all()
                        .iter()
                        .map(|category| {
                            let route = TabRoute::Category(category.key.to_string());
                            view! {
                                <Card attr:class="dashboard__card">
                                    <div class="dashboard__card-header">
                                        {icon(category.icon)}
                                        <h3>{category.name}</h3>
                                    </div>
                                    <p class="dashboard__card-text">{category.description}</p>
                                    <div class="dashboard__card-footer">
                                        <span>{format!("{} tables", category.tables.len())}</span>
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            size=ButtonSize::Small
                                            on_click=move |_| ctx.open_route(&route)
                                        >
                                            "Manage"
                                        </Button>
                                    </div>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>

                <h2 class="dashboard__section-title">"Tables"</h2>
                {move || {
                    if loading.get() {
                        return view! {
                            <Flex gap=FlexGap::Small style="align-items: center; padding: 24px;">
                                <Spinner />
                                <span>"Loading tables..."</span>
                            </Flex>
                        }
                        .into_any();
                    }
                    if let Some(err) = error.get() {
                        return view! { <div class="alert alert--error">{err}</div> }.into_any();
                    }
                    view! {
                        <div class="dashboard__tables">
                            {tables
                                .get()
                                .into_iter()
                                .map(|entry| view! { <TableChip entry=entry /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}

#[component]
fn TableChip(entry: TableEntry) -> impl IntoView {
    let ctx = use_app_context();
    let label = entry.category_label();
    let route = entry
        .category
        .map(|category| TabRoute::table(category.key, &entry.table));
    let clickable = route.is_some();
    let badge_color = if clickable {
        BadgeColor::Informative
    } else {
        BadgeColor::Subtle
    };

    view! {
        <div
            class="dashboard__table"
            class:dashboard__table--link=clickable
            on:click=move |_| {
                if let Some(route) = &route {
                    ctx.open_route(route);
                }
            }
        >
            {icon("database")}
            <span class="dashboard__table-name">{humanize(&entry.table)}</span>
            <Badge appearance=BadgeAppearance::Tint color=badge_color>
                {label}
            </Badge>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tables_are_uncategorized() {
        let entries = classify_tables(vec![
            "players".to_string(),
            "ball_events".to_string(),
            "audit_log".to_string(),
        ]);
        let labels: Vec<_> = entries.iter().map(|e| e.category_label()).collect();
        assert_eq!(
            labels,
            vec!["Players & Contracts", "Match Details", UNCATEGORIZED]
        );
        assert_eq!(entries[2].table, "audit_log");
    }
}
