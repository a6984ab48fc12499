pub mod config;
pub mod keyed;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::ClientConfig;
pub use models::{Session, User};
pub use keyed::KeyValue;
pub use session::{SessionStorage, StorageError};
