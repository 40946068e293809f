pub mod params;
pub mod query_string;
