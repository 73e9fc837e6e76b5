//! Key-value persistence for UI preferences (saved filters, list settings).
//!
//! In the browser everything lives in `window.localStorage`; tests use
//! [`MemoryStorage`].

use serde::de::DeserializeOwned;
use serde::Serialize;

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Every call is a no-op when storage is unavailable
/// (private mode, no window).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("{e:?}"))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

pub fn read_json<T: DeserializeOwned>(storage: &impl KeyValueStorage, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str::<T>(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("Ignoring unreadable '{}' in storage: {}", key, e);
            None
        }
    }
}

pub fn write_json<T: Serialize>(storage: &impl KeyValueStorage, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("Failed to serialize '{}': {}", key, e);
            return;
        }
    };
    if let Err(e) = storage.set(key, &raw) {
        log::warn!("Failed to persist '{}': {}", key, e);
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_helpers() {
        let storage = MemoryStorage::default();
        assert_eq!(read_json::<Vec<u32>>(&storage, "k"), None);

        write_json(&storage, "k", &vec![1u32, 2, 3]);
        assert_eq!(read_json::<Vec<u32>>(&storage, "k"), Some(vec![1, 2, 3]));

        storage.set("k", "{broken").unwrap();
        assert_eq!(read_json::<Vec<u32>>(&storage, "k"), None);

        storage.remove("k");
        assert_eq!(storage.get("k"), None);
    }
}
