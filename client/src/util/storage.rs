//! Browser `localStorage` / `sessionStorage` backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! These centralize the hydrate-only web-sys glue behind `KeyValueStore` so
//! the session store and the dashboard's dismissal flag never touch
//! `window` directly. On the server every read is empty and every write
//! reports `StorageError::Unavailable`.

use crate::state::session::{KeyValueStore, StorageError};

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
enum Area {
    Local,
    Session,
}

#[cfg(feature = "hydrate")]
fn storage(area: Area) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    let storage = match area {
        Area::Local => window.local_storage(),
        Area::Session => window.session_storage(),
    };
    storage.ok().flatten()
}

#[cfg(feature = "hydrate")]
fn get_item(area: Area, key: &str) -> Option<String> {
    storage(area)?.get_item(key).ok().flatten()
}

#[cfg(feature = "hydrate")]
fn set_item(area: Area, key: &str, value: &str) -> Result<(), StorageError> {
    let storage = storage(area).ok_or(StorageError::Unavailable)?;
    storage
        .set_item(key, value)
        .map_err(|e| StorageError::Write(format!("{e:?}")))
}

#[cfg(feature = "hydrate")]
fn remove_item(area: Area, key: &str) {
    if let Some(storage) = storage(area) {
        let _ = storage.remove_item(key);
    }
}

/// Persistent per-origin storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            get_item(Area::Local, key)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            set_item(Area::Local, key, value)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        remove_item(Area::Local, key);
        #[cfg(not(feature = "hydrate"))]
        let _ = key;
    }
}

/// Tab-scoped storage, cleared when the tab closes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStorage;

impl KeyValueStore for SessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            get_item(Area::Session, key)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            set_item(Area::Session, key, value)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        remove_item(Area::Session, key);
        #[cfg(not(feature = "hydrate"))]
        let _ = key;
    }
}
