// Session policy and configuration

pub mod policy;
pub mod types;

pub use policy::{evaluate, IdleVerdict};
pub use types::{MonitorConfig, CHECK_INTERVAL, DEFAULT_TIMEOUT_MINUTES, EXPIRY_NOTICE, LOGIN_ROUTE};
