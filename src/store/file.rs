// File-backed session store

use super::{SessionStore, LAST_ACTIVITY_KEY, TOKEN_KEY, USER_ID_KEY};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::info;

/// Session store persisted as a JSON object on disk, so the session
/// survives process restarts the way browser local storage survives
/// page reloads.
pub struct FileSessionStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file
    lock: RwLock<()>,
}

impl FileSessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: RwLock::new(()),
        }
    }

    fn load_entries(&self) -> Result<HashMap<String, String>, String> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read session file '{}': {}", self.path.display(), e))?;

        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse session file '{}': {}", self.path.display(), e))
    }

    fn save_entries(&self, entries: &HashMap<String, String>) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    format!("Failed to create session directory '{}': {}", parent.display(), e)
                })?;
            }
        }

        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| format!("Failed to serialize session state: {}", e))?;

        fs::write(&self.path, contents)
            .map_err(|e| format!("Failed to write session file '{}': {}", self.path.display(), e))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn marker(&self) -> Result<Option<String>, String> {
        let _guard = self.lock.read().await;
        Ok(self.load_entries()?.get(USER_ID_KEY).cloned())
    }

    async fn token(&self) -> Result<Option<String>, String> {
        let _guard = self.lock.read().await;
        Ok(self.load_entries()?.get(TOKEN_KEY).cloned())
    }

    async fn activity(&self) -> Result<Option<String>, String> {
        let _guard = self.lock.read().await;
        Ok(self.load_entries()?.get(LAST_ACTIVITY_KEY).cloned())
    }

    async fn set_activity(&self, at_ms: i64) -> Result<(), String> {
        let _guard = self.lock.write().await;
        let mut entries = self.load_entries()?;
        entries.insert(LAST_ACTIVITY_KEY.to_string(), at_ms.to_string());
        self.save_entries(&entries)
    }

    async fn establish(&self, user_id: &str, token: &str, at_ms: i64) -> Result<(), String> {
        let _guard = self.lock.write().await;
        let mut entries = self.load_entries()?;
        info!("Establishing session for user {}", user_id);
        entries.insert(USER_ID_KEY.to_string(), user_id.to_string());
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        entries.insert(LAST_ACTIVITY_KEY.to_string(), at_ms.to_string());
        self.save_entries(&entries)
    }

    async fn clear_session(&self) -> Result<(), String> {
        let _guard = self.lock.write().await;
        let mut entries = self.load_entries()?;
        entries.remove(USER_ID_KEY);
        entries.remove(LAST_ACTIVITY_KEY);
        self.save_entries(&entries)
    }

    async fn clear_all(&self) -> Result<(), String> {
        let _guard = self.lock.write().await;
        let mut entries = self.load_entries()?;
        entries.remove(USER_ID_KEY);
        entries.remove(TOKEN_KEY);
        entries.remove(LAST_ACTIVITY_KEY);
        self.save_entries(&entries)
    }
}
