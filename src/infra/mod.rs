pub mod adapters;
pub mod clipboard;
pub mod config;
pub mod schema;
