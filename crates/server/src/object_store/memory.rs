//! In-memory object store.
//!
//! Keeps objects in a `BTreeMap` behind an async lock. Used by tests and for
//! local runs that do not need persistence across restarts.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ObjectStore, ObjectStoreError};

/// Object store holding everything in process memory.
///
/// Listing order is key order (the map is a `BTreeMap`), which satisfies the
/// "no guaranteed sort" contract trivially.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryObjectStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    /// Whether the store holds no objects.
    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(
        &self,
        key: &str,
        bytes: &[u8],
        _content_type: &str,
    ) -> Result<(), ObjectStoreError> {
        self.objects
            .write()
            .await
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ObjectStoreError> {
        Ok(self.objects.read().await.get(key).cloned())
    }

    async fn list(&self) -> Result<Vec<String>, ObjectStoreError> {
        Ok(self.objects.read().await.keys().cloned().collect())
    }

    async fn delete(&self, key: &str) -> Result<(), ObjectStoreError> {
        self.objects.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_delete() {
        let store = MemoryObjectStore::new();

        store.put("k", b"v", "application/json").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some(b"v".as_slice()));

        store.delete("k").await.unwrap();
        assert!(store.get("k").await.unwrap().is_none());
        // Idempotent
        store.delete("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_list() {
        let store = MemoryObjectStore::new();
        store.put("b", b"2", "application/json").await.unwrap();
        store.put("a", b"1", "application/json").await.unwrap();

        assert_eq!(store.list().await.unwrap(), ["a", "b"]);
        assert_eq!(store.len().await, 2);
    }
}
