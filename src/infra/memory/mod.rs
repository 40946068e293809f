pub mod dataset;
pub mod executor;
pub mod repo;
