//! # Client configuration (`equipment-visualizer.toml`)
//!
//! Tells the client where the REST backend lives. Desktop builds read the
//! file from the platform config directory; web builds have no filesystem and
//! rely on the environment override baked in at compile time.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://chemical-equipment-visualizer-tiu4.onrender.com/api"
//! ```
//!
//! ## Resolution order
//!
//! 1. `EQUIPMENT_API_URL` in the process environment (desktop, `.env` honoured)
//! 2. `EQUIPMENT_API_URL` at compile time (`option_env!`, used by web builds)
//! 3. the config file, if one was loaded
//! 4. [`DEFAULT_API_BASE_URL`]
//!
//! A missing or empty config file is equivalent to the default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::session::StorageError;

/// Production backend used when nothing overrides it.
pub const DEFAULT_API_BASE_URL: &str = "https://chemical-equipment-visualizer-tiu4.onrender.com/api";

/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "EQUIPMENT_API_URL";

/// Top-level configuration stored in `equipment-visualizer.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "equipment-visualizer.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `<dir>/equipment-visualizer.toml`, falling back to defaults when
    /// the file does not exist.
    pub fn load_from_dir(dir: &Path) -> Result<Self, StorageError> {
        match std::fs::read_to_string(dir.join(Self::filename())) {
            Ok(content) => Self::from_toml(&content)
                .map_err(|e| StorageError::Unavailable(format!("invalid {}: {e}", Self::filename()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply the runtime and compile-time environment overrides.
    pub fn with_env_overrides(self) -> Self {
        let runtime = std::env::var(API_URL_ENV).ok();
        let baked = option_env!("EQUIPMENT_API_URL").map(str::to_string);
        self.with_override(runtime.or(baked))
    }

    fn with_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }

    /// Default config with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Base URL without trailing slashes, ready for path concatenation.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim().trim_end_matches('/')
    }
}
