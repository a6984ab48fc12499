//! # Browser `localStorage` session store
//!
//! [`LocalStorageStore`] is the [`SessionStorage`] implementation used on the
//! **web platform**. The key layout and the legacy-key migration live in
//! [`crate::keyed`]; this module only adapts `window.localStorage` to
//! [`KeyValue`].
//!
//! The struct is zero-sized and looks up `window.localStorage` on every call.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::keyed::{self, KeyValue};
use crate::models::Session;
use crate::session::{SessionStorage, StorageError};

fn js_error(e: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{e:?}"))
}

/// `localStorage`-backed SessionStorage for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValue for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}

impl SessionStorage for LocalStorageStore {
    fn load(&self) -> Result<Option<Session>, StorageError> {
        keyed::load_session(self)
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        keyed::save_session(self, session)
    }

    fn clear(&self) -> Result<(), StorageError> {
        keyed::clear_session(self)
    }
}
