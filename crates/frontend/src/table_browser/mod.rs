//! Table Browser: schema-driven CRUD over any backend table
//!
//! MVVM split:
//! - state.rs: pure state machine (loading, pagination, search, dialogs)
//! - model.rs: API calls over `AdminApi`
//! - view_model.rs: signals and commands
//! - view.rs: Leptos components (pure UI)
//! - form_field.rs: one input control per column

mod form_field;
mod model;
mod state;
mod view;
mod view_model;

pub use view::TableBrowser;
