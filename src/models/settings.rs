// Application configuration structures

use crate::session::types::DEFAULT_TIMEOUT_MINUTES;
use serde::Deserialize;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionSettings,
}

/// Session layer settings
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// Idle threshold in minutes
    #[serde(default = "default_timeout_minutes")]
    pub timeout_minutes: u64,
    /// Path of the persisted session file
    #[serde(default = "default_store_path")]
    pub store_path: String,
}

fn default_timeout_minutes() -> u64 {
    DEFAULT_TIMEOUT_MINUTES
}

fn default_store_path() -> String {
    "session.json".to_string()
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            timeout_minutes: default_timeout_minutes(),
            store_path: default_store_path(),
        }
    }
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.session.timeout_minutes == 0 {
            return Err("session.timeout_minutes must be at least 1".to_string());
        }

        if self.session.store_path.trim().is_empty() {
            return Err("session.store_path must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session.timeout_minutes, 10);
        assert_eq!(config.session.store_path, "session.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = AppConfig {
            session: SessionSettings {
                timeout_minutes: 0,
                store_path: "session.json".to_string(),
            },
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("at least 1"));
    }

    #[test]
    fn test_empty_store_path_rejected() {
        let config = AppConfig {
            session: SessionSettings {
                timeout_minutes: 10,
                store_path: "  ".to_string(),
            },
        };

        assert!(config.validate().is_err());
    }
}
