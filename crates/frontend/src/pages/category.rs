//! Category page: overview of a category and one card per table.

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::TabRoute;
use crate::shared::icons::icon;
use contracts::admin::categories::{self, Category};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryPage(#[prop(into)] category_key: String) -> impl IntoView {
    let ctx = use_app_context();

    let Some(category) = categories::find(&category_key) else {
        return view! {
            <div class="page page--centered">
                <h1 class="page__title">"Category not found"</h1>
                <p class="page__subtitle">"The requested category does not exist."</p>
                <Button on_click=move |_| ctx.open_route(&TabRoute::Dashboard)>
                    "Back to Dashboard"
                </Button>
            </div>
        }
        .into_any();
    };

    let selected_tab = RwSignal::new("overview".to_string());

    view! {
        <div class="page category">
            <div class="page__header">
                <div class="page__header-left">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.open_route(&TabRoute::Dashboard)
                    >
                        {icon("arrow-left")}
                        " Back to Dashboard"
                    </Button>
                    <div>
                        <h1 class="page__title">{category.name}</h1>
                        <p class="page__subtitle">{category.description}</p>
                    </div>
                </div>
            </div>

            <div class="page__content">
                <TabList selected_value=selected_tab>
                    <Tab value="overview">"Overview"</Tab>
                    <Tab value="tables">"Tables"</Tab>
                </TabList>

                <div class="tab-content">
                    {move || match selected_tab.get().as_str() {
                        "tables" => view! { <TableCards category=category /> }.into_any(),
                        _ => view! { <Overview category=category /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn Overview(category: &'static Category) -> impl IntoView {
    view! {
        <Card>
            <div class="category__info-title">
                {icon("database")}
                <h3>"Category Information"</h3>
            </div>
            <div>
                <h4>"Description"</h4>
                <p class="page__subtitle">{category.description}</p>
            </div>
            <div>
                <h4>"Tables in this category"</h4>
                <div class="category__badges">
                    {category
                        .tables
                        .iter()
                        .map(|table| view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>
                                {*table}
                            </Badge>
                        })
                        .collect_view()}
                </div>
            </div>
        </Card>
    }
}

#[component]
fn TableCards(category: &'static Category) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="category__grid">
            {category
                .tables
                .iter()
                .map(|table| {
                    let readable = table.replace('_', " ");
                    let view_route = TabRoute::table(category.key, table);
                    let create_route = TabRoute::Table {
                        category: category.key.to_string(),
                        table: table.to_string(),
                        create: true,
                    };
                    view! {
                        <Card attr:class="category__card">
                            <div class="category__card-header">
                                <h3 class="category__card-title">{readable.clone()}</h3>
                                {icon("database")}
                            </div>
                            <p class="page__subtitle">
                                {format!("Manage {} data with full CRUD operations", readable)}
                            </p>
                            <div class="category__card-actions">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    size=ButtonSize::Small
                                    on_click=move |_| ctx.open_route(&view_route)
                                >
                                    {icon("eye")}
                                    " View"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    size=ButtonSize::Small
                                    on_click=move |_| ctx.open_route(&create_route)
                                >
                                    {icon("plus")}
                                    " Add New"
                                </Button>
                            </div>
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
}
