pub mod history;
pub mod repo;
