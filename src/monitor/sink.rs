// Expiry side-effect sink

use async_trait::async_trait;
use tracing::{info, warn};

/// Receives the user-facing side effects of an expired session
#[async_trait]
pub trait ExpirySink: Send + Sync {
    /// Surface a blocking notification to the user
    async fn notify(&self, message: &str);

    /// Navigate to the given route
    async fn redirect(&self, route: &str);
}

/// Sink that reports expiry through the log and stderr. Stands in for
/// the alert dialog and router of a graphical client.
pub struct TracingExpirySink;

#[async_trait]
impl ExpirySink for TracingExpirySink {
    async fn notify(&self, message: &str) {
        warn!("{}", message);
        eprintln!("{}", message);
    }

    async fn redirect(&self, route: &str) {
        info!("Redirecting to {}", route);
    }
}
