pub mod grid;
pub mod query;
pub mod user;
