// In-memory session store

use super::{SessionStore, LAST_ACTIVITY_KEY, TOKEN_KEY, USER_ID_KEY};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// In-memory session store implementation
pub struct MemorySessionStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a raw value, bypassing the typed operations. Lets tests
    /// stage malformed data.
    pub async fn insert_raw(&self, key: &str, value: &str) {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn marker(&self) -> Result<Option<String>, String> {
        let entries = self.entries.read().await;
        Ok(entries.get(USER_ID_KEY).cloned())
    }

    async fn token(&self) -> Result<Option<String>, String> {
        let entries = self.entries.read().await;
        Ok(entries.get(TOKEN_KEY).cloned())
    }

    async fn activity(&self) -> Result<Option<String>, String> {
        let entries = self.entries.read().await;
        Ok(entries.get(LAST_ACTIVITY_KEY).cloned())
    }

    async fn set_activity(&self, at_ms: i64) -> Result<(), String> {
        let mut entries = self.entries.write().await;
        entries.insert(LAST_ACTIVITY_KEY.to_string(), at_ms.to_string());
        Ok(())
    }

    async fn establish(&self, user_id: &str, token: &str, at_ms: i64) -> Result<(), String> {
        let mut entries = self.entries.write().await;
        info!("Establishing session for user {}", user_id);
        entries.insert(USER_ID_KEY.to_string(), user_id.to_string());
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        entries.insert(LAST_ACTIVITY_KEY.to_string(), at_ms.to_string());
        Ok(())
    }

    async fn clear_session(&self) -> Result<(), String> {
        let mut entries = self.entries.write().await;
        entries.remove(USER_ID_KEY);
        entries.remove(LAST_ACTIVITY_KEY);
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), String> {
        let mut entries = self.entries.write().await;
        entries.remove(USER_ID_KEY);
        entries.remove(TOKEN_KEY);
        entries.remove(LAST_ACTIVITY_KEY);
        Ok(())
    }
}
