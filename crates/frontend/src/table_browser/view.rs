use super::form_field::FormField;
use super::state::{FormTarget, Phase, RecordView};
use super::view_model::TableBrowserViewModel;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::TabRoute;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::admin::categories;
use contracts::admin::record::cell_text;
use contracts::admin::schema::humanize;
use contracts::admin::Record;
use leptos::prelude::*;
use thaw::*;

/// Paginated, searchable grid over one table with create/edit/delete dialogs.
#[component]
pub fn TableBrowser(
    #[prop(into)] category_key: String,
    #[prop(into)] table_name: String,
    /// Show the create dialog right away ("Add New" from the category page)
    #[prop(optional)]
    open_create: bool,
    /// "Go Back" from the error view
    on_back: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let vm = TableBrowserViewModel::new(table_name.clone());
    vm.load();
    if open_create {
        vm.open_create();
    }

    let readable = table_name.replace('_', " ");
    let subtitle = format!("Manage {} data", readable);
    let create_title = format!("Create New {}", readable);
    let edit_title = format!("Edit {}", readable);
    let view_title = format!("View {}", readable);
    let category_name = categories::find(&category_key)
        .map(|c| c.name.to_string())
        .unwrap_or_else(|| category_key.clone());
    let category_route = TabRoute::Category(category_key);

    let search_text = RwSignal::new(String::new());
    Effect::new(move |_| vm.set_search(search_text.get()));

    let phase = Memo::new(move |_| vm.state.with(|s| s.phase()));

    view! {
        <div class="page table-browser">
            <div class="page__header">
                <div class="page__header-left">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.open_route(&category_route)
                    >
                        {icon("arrow-left")}
                        {format!(" Back to {}", category_name)}
                    </Button>
                    <div>
                        <h1 class="page__title">{humanize(&table_name)}</h1>
                        <p class="page__subtitle">{subtitle}</p>
                    </div>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                        {icon("plus")}
                        " Add New"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="table-browser__toolbar">
                    <span class="table-browser__caption">"Table Data"</span>
                    <div class="table-browser__search">
                        {icon("search")}
                        <Input value=search_text placeholder="Search..." />
                    </div>
                </div>

                {move || match phase.get() {
                    Phase::Loading => view! {
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 48px;">
                            <Spinner />
                            <span>"Loading table data..."</span>
                        </Flex>
                    }
                    .into_any(),
                    Phase::Error => view! {
                        <div class="table-browser__error">
                            <h2>"Error"</h2>
                            // both slices may fail while the phase stays Error
                            <p>{move || vm.state.with(|s| s.error.clone().unwrap_or_default())}</p>
                            <Button on_click=move |_| on_back.run(())>"Go Back"</Button>
                        </div>
                    }
                    .into_any(),
                    Phase::Ready => view! { <DataGrid vm=vm /> }.into_any(),
                }}
            </div>

            <Show when=move || vm.state.with(|s| s.create_open)>
                <Modal
                    title=create_title.clone()
                    on_close=Callback::new(move |_| vm.close_create())
                >
                    <RecordForm vm=vm target=FormTarget::Create />
                    <div class="modal__actions">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.submit_create()>
                            "Create"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.close_create()>
                            "Cancel"
                        </Button>
                    </div>
                </Modal>
            </Show>

            <Show when=move || vm.state.with(|s| s.edit.is_some())>
                <Modal
                    title=edit_title.clone()
                    on_close=Callback::new(move |_| vm.close_edit())
                >
                    <RecordForm vm=vm target=FormTarget::Edit />
                    <div class="modal__actions">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.submit_update()>
                            "Update"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.close_edit()>
                            "Cancel"
                        </Button>
                    </div>
                </Modal>
            </Show>

            <Show when=move || vm.state.with(|s| s.viewing.is_some())>
                <Modal
                    title=view_title.clone()
                    on_close=Callback::new(move |_| vm.close_record_view())
                >
                    <RecordDetails vm=vm />
                </Modal>
            </Show>
        </div>
    }
}

#[component]
fn DataGrid(vm: TableBrowserViewModel) -> impl IntoView {
    let columns = Memo::new(move |_| vm.state.with(|s| s.header_columns()));
    let rows = Memo::new(move |_| vm.state.with(|s| s.rows.clone()));
    let pagination = Signal::derive(move || vm.state.with(|s| s.pagination));

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <For
                            each=move || columns.get()
                            key=|column| column.name.clone()
                            children=|column| view! {
                                <TableHeaderCell>{column.header_label()}</TableHeaderCell>
                            }
                        />
                        <TableHeaderCell attr:style="width: 120px;">"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let columns = columns.get();
                        let rows = rows.get();
                        if rows.is_empty() {
                            let span = (columns.len() + 1).to_string();
                            return view! {
                                <TableRow>
                                    <TableCell class="table__empty" attr:colspan=span>
                                        "No data found"
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|row| {
                                let cells = columns
                                    .iter()
                                    .map(|column| {
                                        let text = cell_text(row.get(&column.name));
                                        view! {
                                            <TableCell>
                                                <TableCellLayout truncate=true>{text}</TableCellLayout>
                                            </TableCell>
                                        }
                                    })
                                    .collect_view();
                                view! {
                                    <TableRow>
                                        {cells}
                                        <TableCell>
                                            <RowActions vm=vm row=row />
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </div>

        <PaginationControls
            pagination=pagination
            on_page_change=Callback::new(move |page| vm.go_to_page(page))
        />
    }
}

#[component]
fn RowActions(vm: TableBrowserViewModel, row: Record) -> impl IntoView {
    let row = StoredValue::new(row);

    view! {
        <div class="table__actions">
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| row.with_value(|r| vm.view_record(r))
                attr:title="View"
            >
                {icon("eye")}
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| row.with_value(|r| vm.open_edit(r))
                attr:title="Edit"
            >
                {icon("edit")}
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| row.with_value(|r| vm.delete(r))
                attr:title="Delete"
            >
                {icon("delete")}
            </Button>
        </div>
    }
}

#[component]
fn RecordForm(vm: TableBrowserViewModel, target: FormTarget) -> impl IntoView {
    let columns = Memo::new(move |_| vm.state.with(|s| s.form_columns()));

    view! {
        <div class="form">
            <For
                each=move || columns.get()
                key=|column| column.name.clone()
                children=move |column| {
                    let name = column.name.clone();
                    let value = Signal::derive(move || {
                        vm.state.with(|s| s.buffer(target).and_then(|b| b.get(&name).cloned()))
                    });
                    let name = column.name.clone();
                    let on_change = Callback::new(move |v| vm.set_field(target, &name, v));
                    view! { <FormField column=column value=value on_change=on_change /> }
                }
            />
        </div>
    }
}

#[component]
fn RecordDetails(vm: TableBrowserViewModel) -> impl IntoView {
    let viewing = Memo::new(move |_| vm.state.with(|s| s.viewing.clone()));

    move || match viewing.get() {
        None | Some(RecordView::Loading(_)) => view! {
            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 24px;">
                <Spinner />
                <span>"Loading record..."</span>
            </Flex>
        }
        .into_any(),
        Some(RecordView::Failed(_, message)) => view! {
            <div class="alert alert--error">{icon("alert")}<span>{message}</span></div>
        }
        .into_any(),
        Some(RecordView::Loaded(_, record)) => view! {
            <dl class="record-details">
                {record
                    .iter()
                    .map(|(key, value)| {
                        let text = cell_text(Some(value));
                        view! {
                            <dt class="record-details__key">{key.replace('_', " ").to_uppercase()}</dt>
                            <dd class="record-details__value">{text}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        }
        .into_any(),
    }
}
