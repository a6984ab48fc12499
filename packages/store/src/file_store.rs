//! # Filesystem-backed session store
//!
//! [`FileStore`] keeps the session record as JSON in a single file. It is used
//! on desktop so a restart restores the signed-in user.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.json        # {"token": "...", "user": {"id": 1, "username": "..."}}
//! ```
//!
//! Writes go to `session.json.tmp` first and are renamed into place, so a
//! crash mid-write leaves either the old record or the new one.
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/equipment-visualizer/` |
//! | Linux | `~/.local/share/equipment-visualizer/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\equipment-visualizer\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::models::Session;
use crate::session::{SessionStorage, StorageError};

const SESSION_FILE: &str = "session.json";

/// Filesystem-backed SessionStorage for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_path(&self) -> PathBuf {
        self.base.join(SESSION_FILE)
    }

    fn temp_path(&self) -> PathBuf {
        self.base.join(format!("{SESSION_FILE}.tmp"))
    }
}

impl SessionStorage for FileStore {
    fn load(&self) -> Result<Option<Session>, StorageError> {
        match std::fs::read_to_string(self.session_path()) {
            Ok(content) => Ok(Some(Session::from_json(&content)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base)?;
        let tmp = self.temp_path();
        std::fs::write(&tmp, session.to_json()?)?;
        std::fs::rename(&tmp, self.session_path())?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(self.session_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("equipment-visualizer"));

        assert_eq!(store.load().unwrap(), None);
        store.save(&Session::new("t1", 1, "bob")).unwrap();

        // Re-open from the same directory
        let reopened = FileStore::new(dir.path().join("equipment-visualizer"));
        let session = reopened.load().unwrap().unwrap();
        assert_eq!(session.token, "t1");
        assert_eq!(session.user.id, 1);
        assert!(!reopened.temp_path().exists());

        let raw = std::fs::read_to_string(reopened.session_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["user"], serde_json::json!({"id": 1, "username": "bob"}));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        store.clear().unwrap();

        store.save(&Session::new("t1", 1, "bob")).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "{not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(store.load(), Err(StorageError::Serialization(_))));
        assert_eq!(store.token(), None);
    }
}
