pub mod columns;
pub mod components;
pub mod state;
pub mod theme;
pub mod views;
