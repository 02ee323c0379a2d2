pub mod api_response;
pub mod pagination;

pub use api_response::{ApiError, ApiResponse};
pub use pagination::{Pagination, TablePage};
