pub mod api;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod sort;
