//! Platform-appropriate session storage and client configuration.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`],
//!   config from the compile-time environment only
//! - **Desktop** (native): `<data_dir>/equipment-visualizer/session.json` via
//!   [`store::FileStore`], config from `<config_dir>/equipment-visualizer/`
//!   plus the process environment

use std::path::PathBuf;
use std::rc::Rc;

use store::{ClientConfig, SessionStorage};

const APP_DIR: &str = "equipment-visualizer";

/// Create the session store for the current platform.
pub fn make_session_storage() -> Rc<dyn SessionStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorageStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Rc::new(store::FileStore::new(app_dir(dirs::data_dir())))
    }
}

/// Resolve the client configuration for the current platform.
///
/// A broken config file is logged and ignored; the app still starts against
/// the default backend.
pub fn load_client_config() -> ClientConfig {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        ClientConfig::from_env()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let dir = app_dir(dirs::config_dir());
        match ClientConfig::load_from_dir(&dir) {
            Ok(config) => config.with_env_overrides(),
            Err(e) => {
                tracing::error!("Failed to read config from {}: {}", dir.display(), e);
                ClientConfig::from_env()
            }
        }
    }
}

fn app_dir(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_dir_falls_back_to_cwd() {
        assert_eq!(app_dir(None), PathBuf::from("./equipment-visualizer"));
        assert_eq!(
            app_dir(Some(PathBuf::from("/data"))),
            PathBuf::from("/data/equipment-visualizer")
        );
    }
}
