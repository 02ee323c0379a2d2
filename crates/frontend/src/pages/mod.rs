pub mod category;
pub mod dashboard;

pub use category::CategoryPage;
pub use dashboard::DashboardPage;
