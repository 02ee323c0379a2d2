//! Tab management
//!
//! - `route` - tab key ⇄ `TabRoute`, tab titles
//! - `registry` - tab key → view
//! - `page` - wrapper that shows/hides one tab's content

pub mod page;
pub mod registry;
pub mod route;

pub use page::TabPage;
pub use route::{tab_label_for_key, TabRoute};
