// Idle session monitor

mod clock;
mod idle;
mod sink;

pub use clock::{Clock, SystemClock};
pub use idle::{ActivityEvent, IdleMonitor, MonitorHandle};
pub use sink::{ExpirySink, TracingExpirySink};
