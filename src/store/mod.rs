// Session store backends

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use async_trait::async_trait;

/// Key holding the session marker (user id). Presence means "logged in".
pub const USER_ID_KEY: &str = "user_id";

/// Key holding the auth token. Written at login, removed at logout.
pub const TOKEN_KEY: &str = "token";

/// Key holding the last-activity timestamp, a stringified
/// epoch-millisecond integer.
pub const LAST_ACTIVITY_KEY: &str = "lastActivity";

/// Trait for persisted session state
///
/// The idle monitor only uses `marker`, `activity`, `set_activity`
/// and `clear_session`; the remaining operations belong to the
/// login/logout flows.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Get the session marker (user id), if a session exists
    async fn marker(&self) -> Result<Option<String>, String>;

    /// Get the stored auth token
    async fn token(&self) -> Result<Option<String>, String>;

    /// Get the raw last-activity value. Returned unparsed: the expiry
    /// policy decides what a malformed value means.
    async fn activity(&self) -> Result<Option<String>, String>;

    /// Record an activity timestamp (epoch milliseconds)
    async fn set_activity(&self, at_ms: i64) -> Result<(), String>;

    /// Establish a session: marker, token, and a fresh activity
    /// timestamp (login flow)
    async fn establish(&self, user_id: &str, token: &str, at_ms: i64) -> Result<(), String>;

    /// Remove the marker and activity timestamp on idle expiry. The
    /// token is intentionally left in place; dropping it is the
    /// logout flow's job (`clear_all`).
    async fn clear_session(&self) -> Result<(), String>;

    /// Remove every session key, including the token (logout flow)
    async fn clear_all(&self) -> Result<(), String>;
}
