//! # Session persistence
//!
//! [`SessionStorage`] is the seam between the auth layer and wherever the
//! platform keeps durable state. Implementations live in sibling modules:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::MemoryStore`] | tests, headless fallback |
//! | [`crate::FileStore`] | desktop (`session.json` under the data dir) |
//! | `LocalStorageStore` | browser (`localStorage`, key `"session"`) |
//!
//! Every write replaces the whole record; there is no partial update.

use crate::models::Session;

/// Errors raised by a [`SessionStorage`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored session is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable home of the single session record.
pub trait SessionStorage {
    /// Read the stored session, `Ok(None)` when signed out.
    fn load(&self) -> Result<Option<Session>, StorageError>;

    /// Replace the stored session.
    fn save(&self, session: &Session) -> Result<(), StorageError>;

    /// Remove the stored session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StorageError>;

    /// Current bearer token, if any. Read failures count as signed out.
    fn token(&self) -> Option<String> {
        self.load().ok().flatten().map(|s| s.token)
    }
}
