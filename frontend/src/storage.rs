//! Platform persistence for the theme flag: browser localStorage on wasm,
//! `settings.json` in the user data dir on desktop.

use rafiq_core::Config;

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStorage;

#[cfg(target_arch = "wasm32")]
pub type PlatformStore = LocalStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = Box<dyn rafiq_core::KeyValueStore>;

#[cfg(target_arch = "wasm32")]
pub fn open_platform_store(_config: &Config) -> PlatformStore {
    LocalStorage::open()
}

/// Falls back to an in-memory store when the platform has no data dir.
#[cfg(not(target_arch = "wasm32"))]
pub fn open_platform_store(config: &Config) -> PlatformStore {
    match config.data_dir.as_ref() {
        Some(dir) => Box::new(rafiq_core::FileStore::open(dir)),
        None => {
            tracing::warn!("no data dir; theme choice will not outlive this session");
            Box::new(rafiq_core::MemoryStore::new())
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use rafiq_core::{KeyValueStore, StorageError};

    /// `window.localStorage`. Absent in some private modes, in which case every call errors.
    pub struct LocalStorage {
        inner: Option<web_sys::Storage>,
    }

    impl LocalStorage {
        pub fn open() -> Self {
            let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            Self { inner }
        }

        fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
            self.inner
                .as_ref()
                .ok_or_else(|| StorageError::Unavailable("localStorage".into()))
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage()?
                .get_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
        }
    }
}
