// Time source

use chrono::Utc;

/// Time source for the monitor
pub trait Clock: Send + Sync {
    /// Current time as epoch milliseconds
    fn now_ms(&self) -> i64;
}

/// Wall-clock time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
