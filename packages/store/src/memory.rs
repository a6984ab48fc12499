use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::Session;
use crate::session::{SessionStorage, StorageError};

/// In-memory SessionStorage for testing and headless fallback.
///
/// Clones share the same slot, so a test can hand one clone to the client and
/// inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    session: Arc<Mutex<Option<Session>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts signed in.
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(Some(session))),
        }
    }

    fn slot(&self) -> Result<MutexGuard<'_, Option<Session>>, StorageError> {
        self.session
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl SessionStorage for MemoryStore {
    fn load(&self) -> Result<Option<Session>, StorageError> {
        Ok(self.slot()?.clone())
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        *self.slot()? = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot()? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.token(), None);

        store.save(&Session::new("t1", 1, "bob")).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.user.username, "bob");
        assert_eq!(store.token().as_deref(), Some("t1"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let observer = store.clone();
        store.save(&Session::new("abc", 7, "alice")).unwrap();
        assert_eq!(observer.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_save_replaces_whole_record() {
        let store = MemoryStore::with_session(Session::new("old", 1, "bob"));
        store.save(&Session::new("new", 2, "carol")).unwrap();
        assert_eq!(store.load().unwrap(), Some(Session::new("new", 2, "carol")));
    }
}
