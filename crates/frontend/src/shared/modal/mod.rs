use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Open dialogs, innermost last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalStack {
    open: Vec<u64>,
    next_id: u64,
}

impl ModalStack {
    pub fn push(&mut self) -> u64 {
        self.next_id += 1;
        self.open.push(self.next_id);
        self.next_id
    }

    pub fn remove(&mut self, id: u64) {
        self.open.retain(|open| *open != id);
    }

    pub fn is_top(&self, id: u64) -> bool {
        self.open.last() == Some(&id)
    }
}

/// Shared stack so Escape reaches only the topmost `Modal`.
#[derive(Clone, Copy)]
pub struct ModalStackService(RwSignal<ModalStack>);

impl ModalStackService {
    pub fn new() -> Self {
        Self(RwSignal::new(ModalStack::default()))
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal_stack() -> ModalStackService {
    use_context::<ModalStackService>().expect("ModalStackService not provided in context")
}

/// Dialog over a dimmed overlay. Escape (topmost dialog only), an overlay
/// click and the header close button all call `on_close`.
#[component]
pub fn Modal(
    /// Title of the dialog
    #[prop(into)]
    title: String,
    /// Callback when the dialog should close
    on_close: Callback<()>,
    /// Dialog body
    children: Children,
) -> impl IntoView {
    let stack = use_modal_stack().0;
    let id = stack.try_update(|s| s.push()).unwrap_or_default();

    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() != "Escape" || !stack.with_untracked(|s| s.is_top(id)) {
            return;
        }
        event.stop_immediate_propagation();
        on_close.run(());
    });
    on_cleanup(move || {
        handle.remove();
        stack.try_update(|s| s.remove(id));
    });

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
