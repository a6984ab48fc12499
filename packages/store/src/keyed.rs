//! # Key-value session layout
//!
//! Browser storage is a flat string map. The session lives there as one JSON
//! string under `"session"`.
//!
//! Earlier builds kept the token and the user under two separate keys
//! (`"token"` and `"user"`). When the combined key is missing and both legacy
//! keys are present, [`load_session`] folds them into the new record and
//! removes the old keys. [`clear_session`] always removes all three.
//!
//! The functions here only need a [`KeyValue`], so the layout is tested
//! natively against an in-memory map.

use crate::models::{Session, User};
use crate::session::StorageError;

pub const SESSION_KEY: &str = "session";
pub const LEGACY_TOKEN_KEY: &str = "token";
pub const LEGACY_USER_KEY: &str = "user";

/// A flat string-to-string store such as `localStorage`.
pub trait KeyValue {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub fn load_session(kv: &impl KeyValue) -> Result<Option<Session>, StorageError> {
    match kv.get(SESSION_KEY)? {
        Some(json) => Ok(Some(Session::from_json(&json)?)),
        None => migrate_legacy(kv),
    }
}

pub fn save_session(kv: &impl KeyValue, session: &Session) -> Result<(), StorageError> {
    kv.set(SESSION_KEY, &session.to_json()?)
}

pub fn clear_session(kv: &impl KeyValue) -> Result<(), StorageError> {
    for key in [SESSION_KEY, LEGACY_TOKEN_KEY, LEGACY_USER_KEY] {
        kv.remove(key)?;
    }
    Ok(())
}

fn migrate_legacy(kv: &impl KeyValue) -> Result<Option<Session>, StorageError> {
    let (Some(token), Some(user)) = (kv.get(LEGACY_TOKEN_KEY)?, kv.get(LEGACY_USER_KEY)?) else {
        return Ok(None);
    };
    let user: User = serde_json::from_str(&user)?;
    let session = Session { token, user };
    save_session(kv, &session)?;
    kv.remove(LEGACY_TOKEN_KEY)?;
    kv.remove(LEGACY_USER_KEY)?;
    Ok(Some(session))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MapStore(RefCell<HashMap<String, String>>);

    impl MapStore {
        fn with(entries: &[(&str, &str)]) -> Self {
            let map = entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            Self(RefCell::new(map))
        }

        fn keys(&self) -> Vec<String> {
            let mut keys: Vec<String> = self.0.borrow().keys().cloned().collect();
            keys.sort();
            keys
        }
    }

    impl KeyValue for MapStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.0.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().remove(key);
            Ok(())
        }
    }

    #[test]
    fn test_save_then_load() {
        let kv = MapStore::default();
        assert_eq!(load_session(&kv).unwrap(), None);

        let session = Session::new("t1", 1, "bob");
        save_session(&kv, &session).unwrap();
        assert_eq!(kv.keys(), vec!["session"]);
        assert_eq!(load_session(&kv).unwrap(), Some(session));
    }

    #[test]
    fn test_legacy_keys_are_migrated() {
        let kv = MapStore::with(&[
            ("token", "old-token"),
            ("user", r#"{"id":7,"username":"alice"}"#),
        ]);

        let session = load_session(&kv).unwrap().unwrap();
        assert_eq!(session, Session::new("old-token", 7, "alice"));
        assert_eq!(kv.keys(), vec!["session"]);
        assert_eq!(load_session(&kv).unwrap(), Some(session));
    }

    #[test]
    fn test_combined_key_wins_over_legacy_keys() {
        let current = Session::new("new-token", 1, "bob").to_json().unwrap();
        let kv = MapStore::with(&[
            ("session", current.as_str()),
            ("token", "old-token"),
            ("user", r#"{"id":7,"username":"alice"}"#),
        ]);

        let session = load_session(&kv).unwrap().unwrap();
        assert_eq!(session.token, "new-token");
        assert_eq!(kv.keys(), vec!["session", "token", "user"]);
    }

    #[test]
    fn test_half_legacy_pair_is_signed_out() {
        let kv = MapStore::with(&[("token", "old-token")]);
        assert_eq!(load_session(&kv).unwrap(), None);
        assert_eq!(kv.keys(), vec!["token"]);
    }

    #[test]
    fn test_corrupt_legacy_user_is_an_error() {
        let kv = MapStore::with(&[("token", "old-token"), ("user", "not json")]);
        assert!(matches!(
            load_session(&kv),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn test_clear_removes_all_three_keys() {
        let kv = MapStore::with(&[
            ("session", "{}"),
            ("token", "old-token"),
            ("user", "{}"),
            ("theme", "dark"),
        ]);
        clear_session(&kv).unwrap();
        assert_eq!(kv.keys(), vec!["theme"]);

        clear_session(&kv).unwrap();
    }
}
