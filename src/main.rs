mod config;
mod models;
mod monitor;
mod session;
mod store;

use monitor::{ActivityEvent, IdleMonitor, TracingExpirySink};
use session::MonitorConfig;
use store::{FileSessionStore, SessionStore};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pricepilot_session=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = match config::load_config_with_fallback() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(&config.session.store_path));

    let monitor = IdleMonitor::new(
        store.clone(),
        Arc::new(TracingExpirySink),
        MonitorConfig::new(config.session.timeout_minutes),
    );
    let handle = monitor.spawn();

    tracing::info!("🚀 PricePilot session shell ready");
    tracing::info!(
        "Commands: login <user_id> <token>, logout, status, quit. Anything else counts as activity."
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("login") => match (parts.next(), parts.next()) {
                (Some(user_id), Some(token)) => {
                    let now = chrono::Utc::now().timestamp_millis();
                    match store.establish(user_id, token, now).await {
                        Ok(()) => tracing::info!("Logged in as {}", user_id),
                        Err(e) => tracing::error!("Login failed: {}", e),
                    }
                }
                _ => tracing::warn!("Usage: login <user_id> <token>"),
            },
            Some("logout") => match store.clear_all().await {
                Ok(()) => tracing::info!("Logged out"),
                Err(e) => tracing::error!("Logout failed: {}", e),
            },
            Some("status") => match store.marker().await {
                Ok(Some(user_id)) => tracing::info!("Logged in as {}", user_id),
                Ok(None) => tracing::info!("Not logged in"),
                Err(e) => tracing::error!("Failed to read session: {}", e),
            },
            Some("quit") => break,
            Some(_) => handle.record(ActivityEvent::KeyPressed),
            None => {}
        }
    }

    handle.stop();
    tracing::info!("Goodbye");
}
