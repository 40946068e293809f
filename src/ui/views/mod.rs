pub mod address_bar;
pub mod dynamic_table;
pub mod static_table;
