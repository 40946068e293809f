pub mod coerce;
pub mod entities;
