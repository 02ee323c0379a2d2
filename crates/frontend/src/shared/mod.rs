pub mod api;
pub mod components;
pub mod icons;
pub mod modal;
pub mod toast;
