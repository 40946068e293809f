pub mod history;
pub mod memory;
pub mod settings;
pub mod url;
