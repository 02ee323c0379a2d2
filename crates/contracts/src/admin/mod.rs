//! Schema-driven table administration: column metadata, records, categories
//! and the admin backend contract.

pub mod api;
pub mod categories;
pub mod endpoints;
pub mod normalize;
pub mod record;
pub mod schema;

pub use api::AdminApi;
pub use endpoints::DataPageQuery;
pub use normalize::FieldRenames;
pub use record::{EditBuffer, Record, RecordId};
pub use schema::{ColumnDescriptor, FieldControl, TableSchema};
