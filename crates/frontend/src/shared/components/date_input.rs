use leptos::prelude::*;

/// Native date picker bound to a `yyyy-mm-dd` string.
/// The raw input string is handed to `on_change` without parsing.
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Receives the raw input value on every change
    on_change: impl Fn(String) + 'static,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form__input"
            id=id
            required=required
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
