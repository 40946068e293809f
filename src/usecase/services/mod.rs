pub mod grid_sync;
pub mod query_service;
