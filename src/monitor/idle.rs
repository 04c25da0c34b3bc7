// Idle session monitor task

use super::clock::{Clock, SystemClock};
use super::sink::ExpirySink;
use crate::session::policy::{self, IdleVerdict};
use crate::session::types::{MonitorConfig, CHECK_INTERVAL, EXPIRY_NOTICE, LOGIN_ROUTE};
use crate::store::SessionStore;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

/// User input observed by the application and forwarded to the monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityEvent {
    PointerMoved,
    KeyPressed,
}

/// Watches a session for idle expiry.
///
/// Spawning the monitor writes a fresh activity baseline, then runs a
/// periodic check every 30 seconds: if the session marker is present
/// and more than the configured threshold has elapsed since the last
/// recorded activity, the session is cleared and the sink is told to
/// notify the user and redirect to the login route. Activity events
/// refresh the timestamp and do nothing else.
pub struct IdleMonitor {
    store: Arc<dyn SessionStore>,
    sink: Arc<dyn ExpirySink>,
    clock: Arc<dyn Clock>,
    config: MonitorConfig,
}

impl IdleMonitor {
    pub fn new(
        store: Arc<dyn SessionStore>,
        sink: Arc<dyn ExpirySink>,
        config: MonitorConfig,
    ) -> Self {
        Self {
            store,
            sink,
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Replace the wall clock. Used by the timing tests.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Start the monitor. To change the timeout, stop the returned
    /// handle and spawn a new monitor; the fresh spawn re-runs the
    /// whole activation sequence, baseline included.
    pub fn spawn(self) -> MonitorHandle {
        let (activity_tx, mut activity_rx) = mpsc::unbounded_channel::<ActivityEvent>();
        let Self {
            store,
            sink,
            clock,
            config,
        } = self;
        let timeout_ms = config.timeout_ms();

        let task = tokio::spawn(async move {
            // Fresh baseline, so a monitor started right after login
            // never compares against a stale timestamp.
            if let Err(e) = store.set_activity(clock.now_ms()).await {
                warn!("Failed to record activity baseline: {}", e);
            }

            info!(
                "Idle monitor started (timeout: {} min)",
                config.timeout_minutes
            );

            let mut ticker = interval(CHECK_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    event = activity_rx.recv() => match event {
                        Some(event) => {
                            debug!("Activity: {:?}", event);
                            if let Err(e) = store.set_activity(clock.now_ms()).await {
                                warn!("Failed to record activity: {}", e);
                            }
                        }
                        // All senders dropped
                        None => break,
                    },
                    _ = ticker.tick() => {
                        run_check(store.as_ref(), sink.as_ref(), clock.as_ref(), timeout_ms).await;
                    }
                }
            }

            info!("Idle monitor stopped");
        });

        MonitorHandle { activity_tx, task }
    }
}

/// One periodic idle check. Every expiry side effect happens here and
/// nowhere else.
async fn run_check(
    store: &dyn SessionStore,
    sink: &dyn ExpirySink,
    clock: &dyn Clock,
    timeout_ms: i64,
) {
    let marker = match store.marker().await {
        Ok(marker) => marker,
        Err(e) => {
            warn!("Failed to read session marker: {}", e);
            return;
        }
    };

    let activity = match store.activity().await {
        Ok(activity) => activity,
        Err(e) => {
            warn!("Failed to read activity timestamp: {}", e);
            return;
        }
    };

    match policy::evaluate(clock.now_ms(), marker.is_some(), activity.as_deref(), timeout_ms) {
        IdleVerdict::Expired { idle_ms } => {
            info!("Session expired after {} ms idle, logging out", idle_ms);
            if let Err(e) = store.clear_session().await {
                warn!("Failed to clear expired session: {}", e);
            }
            sink.notify(EXPIRY_NOTICE).await;
            sink.redirect(LOGIN_ROUTE).await;
        }
        IdleVerdict::Active { idle_ms } => {
            debug!("Session active, idle for {} ms", idle_ms);
        }
        IdleVerdict::NoSession | IdleVerdict::NoActivity => {}
    }
}

/// Handle to a running monitor. Stopping or dropping it cancels the
/// periodic check and detaches the activity channel.
pub struct MonitorHandle {
    activity_tx: mpsc::UnboundedSender<ActivityEvent>,
    task: JoinHandle<()>,
}

impl MonitorHandle {
    /// Forward a user-input event. Refreshes the activity timestamp;
    /// never triggers expiry side effects.
    pub fn record(&self, event: ActivityEvent) {
        // Send only fails once the monitor has stopped
        let _ = self.activity_tx.send(event);
    }

    /// Stop the monitor. No check or storage mutation runs after this
    /// returns.
    pub fn stop(self) {
        self.task.abort();
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
