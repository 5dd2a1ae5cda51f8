pub mod board;
pub mod config;
pub mod core;
pub mod store;
