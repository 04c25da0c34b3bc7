// Library exports for testing
pub mod config;
pub mod models;
pub mod monitor;
pub mod session;
pub mod store;
