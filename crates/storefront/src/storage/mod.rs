//! Durable local storage.
//!
//! Stores keep their collections in memory and mirror them here after every
//! mutation. Values are JSON text under short string keys; the mirror is read
//! once when a store is constructed and is never the source of truth during a
//! session.
//!
//! Writes are not batched and there is no multi-key transaction: after a
//! crash the mirror reflects the last completed write.

mod file;
mod memory;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors raised by a [`DurableStorage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the underlying medium failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the backend cannot store.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// String key-value storage that survives restarts.
pub trait DurableStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage handle shared between stores.
pub type SharedStorage = Arc<dyn DurableStorage>;

/// Storage keys for each persisted collection.
pub mod keys {
    /// Key for the serialized cart lines.
    pub const CART: &str = "herd_market_cart";

    /// Key for the serialized wishlist entries.
    pub const WISHLIST: &str = "herd_market_wishlist";

    /// Key for the serialized notification records.
    pub const NOTIFICATIONS: &str = "herd_market_notifications";
}

/// Load a persisted collection.
///
/// Absent, unreadable, or malformed data all yield an empty collection.
pub(crate) fn load_collection<T: DeserializeOwned>(storage: &dyn DurableStorage, key: &str) -> Vec<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "No persisted state, starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read persisted state, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => {
            tracing::debug!(key, count = items.len(), "Loaded persisted state");
            items
        }
        Err(e) => {
            tracing::warn!(
                key,
                error = %e,
                body = %raw.chars().take(200).collect::<String>(),
                "Discarding malformed persisted state"
            );
            Vec::new()
        }
    }
}

/// Mirror a collection to storage. Failures are logged, never returned.
pub(crate) fn persist_collection<T: Serialize>(storage: &dyn DurableStorage, key: &str, items: &[T]) {
    let raw = match serde_json::to_string(items) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(key, error = %e, "Failed to serialize state for persistence");
            return;
        }
    };

    if let Err(e) = storage.set(key, &raw) {
        tracing::warn!(key, error = %e, "Failed to persist state");
    }
}

/// Drop a collection from storage. Failures are logged, never returned.
pub(crate) fn clear_collection(storage: &dyn DurableStorage, key: &str) {
    if let Err(e) = storage.remove(key) {
        tracing::warn!(key, error = %e, "Failed to clear persisted state");
    }
}

/// Storage whose every operation fails with an I/O error.
#[cfg(test)]
pub(crate) struct FailingStorage;

#[cfg(test)]
impl FailingStorage {
    fn error() -> StorageError {
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only medium").into()
    }
}

#[cfg(test)]
impl DurableStorage for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(Self::error())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(Self::error())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(Self::error())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_absent_key_is_empty() {
        let storage = MemoryStorage::new();
        let items: Vec<u32> = load_collection(&storage, "missing");
        assert!(items.is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let storage = MemoryStorage::new();
        storage.set("k", "\"not an array\"").unwrap();
        let items: Vec<u32> = load_collection(&storage, "k");
        assert!(items.is_empty());

        storage.set("k", "{broken").unwrap();
        let items: Vec<u32> = load_collection(&storage, "k");
        assert!(items.is_empty());
    }

    #[test]
    fn test_persist_then_load() {
        let storage = MemoryStorage::new();
        persist_collection(&storage, "k", &[1_u32, 2, 3][..]);
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("[1,2,3]"));
        let items: Vec<u32> = load_collection(&storage, "k");
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_unreadable_storage_is_empty() {
        let items: Vec<u32> = load_collection(&FailingStorage, keys::CART);
        assert!(items.is_empty());
    }

    #[test]
    fn test_write_failures_are_swallowed() {
        persist_collection(&FailingStorage, keys::CART, &[1_u32][..]);
        clear_collection(&FailingStorage, keys::CART);
    }

    #[test]
    fn test_clear_removes_key() {
        let storage = MemoryStorage::new();
        persist_collection(&storage, "k", &[1_u32][..]);
        clear_collection(&storage, "k");
        assert!(storage.get("k").unwrap().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_keys_are_distinct() {
        assert_ne!(keys::CART, keys::WISHLIST);
        assert_ne!(keys::WISHLIST, keys::NOTIFICATIONS);
    }
}
