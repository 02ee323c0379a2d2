pub mod admin;
pub mod shared;
