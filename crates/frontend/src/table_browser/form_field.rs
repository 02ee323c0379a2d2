//! One input control per editable column
//!
//! The control is picked by `FieldControl::for_column`; identity and
//! timestamp columns render nothing. Every edit is reported as a single
//! `name → value` update through `on_change`.

use crate::shared::components::DateInput;
use contracts::admin::{ColumnDescriptor, FieldControl};
use leptos::prelude::*;
use serde_json::Value;

#[component]
pub fn FormField(
    column: ColumnDescriptor,
    /// Current buffer value, `None` when the key is absent
    #[prop(into)]
    value: Signal<Option<Value>>,
    on_change: Callback<Value>,
) -> impl IntoView {
    let Some(control) = FieldControl::for_column(&column) else {
        return ().into_any();
    };

    let input_id = format!("field-{}", column.name);
    let placeholder = control.placeholder(&column);
    let required = column.is_required();
    let text = Signal::derive(move || control.display_value(value.get().as_ref()));
    let emit = move |raw: String| on_change.run(control.value_from_input(raw));

    let input = match control {
        FieldControl::Date => view! {
            <DateInput value=text on_change=emit id=input_id.clone() required=required />
        }
        .into_any(),
        FieldControl::Json => view! {
            <textarea
                id=input_id.clone()
                class="form__textarea"
                rows=3
                placeholder=placeholder
                required=required
                prop:value=text
                on:input=move |ev| emit(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldControl::UserDefined | FieldControl::Text => view! {
            <input
                id=input_id.clone()
                type="text"
                class="form__input"
                placeholder=placeholder
                required=required
                prop:value=text
                on:input=move |ev| emit(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form__group" data-control=format!("{:?}", control).to_lowercase()>
            <label class="form__label" for=input_id>
                {column.form_label()}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            {input}
        </div>
    }
    .into_any()
}
