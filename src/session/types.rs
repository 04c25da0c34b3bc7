// Session configuration and constants

use std::time::Duration;

/// How often the monitor re-evaluates idle time. Fixed, not configurable.
pub const CHECK_INTERVAL: Duration = Duration::from_secs(30);

/// Default idle threshold in minutes
pub const DEFAULT_TIMEOUT_MINUTES: u64 = 10;

/// Notice surfaced to the user when the session expires
pub const EXPIRY_NOTICE: &str = "Session expired. Please log in again.";

/// Route the user is sent to after expiry
pub const LOGIN_ROUTE: &str = "/login";

/// Idle monitor configuration
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Idle threshold in minutes
    pub timeout_minutes: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            timeout_minutes: DEFAULT_TIMEOUT_MINUTES,
        }
    }
}

impl MonitorConfig {
    pub fn new(timeout_minutes: u64) -> Self {
        Self { timeout_minutes }
    }

    /// Idle threshold in milliseconds, converted once at monitor start
    pub fn timeout_ms(&self) -> i64 {
        (self.timeout_minutes * 60 * 1000) as i64
    }
}
