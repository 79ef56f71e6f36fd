use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Rejected(String),
}

/// String key-value store backed by one of the browser storage areas.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

fn write(storage: Option<Storage>, key: &str, value: &str) -> Result<(), StorageError> {
    storage
        .ok_or(StorageError::Unavailable)?
        .set_item(key, value)
        .map_err(|err| StorageError::Rejected(format!("{:?}", err)))
}

/// `window.localStorage`: survives page loads and browser restarts.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<Storage> {
        window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        write(Self::storage(), key, value)
    }
}

/// `window.sessionStorage`: cleared when the tab closes.
pub struct SessionStorage;

impl SessionStorage {
    fn storage() -> Option<Storage> {
        window()?.session_storage().ok().flatten()
    }
}

impl KeyValueStore for SessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        write(Self::storage(), key, value)
    }
}
