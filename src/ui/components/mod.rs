pub mod data_grid;
pub mod dropdown;
pub mod filter_editor;
pub mod header;
pub mod pagination;
