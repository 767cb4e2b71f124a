/// Client configuration
pub mod config;
