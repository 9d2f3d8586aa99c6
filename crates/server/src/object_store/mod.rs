//! Key-addressed object store abstraction.
//!
//! The service persists one JSON blob per address in a flat, key-addressed
//! store. The backing store is an external collaborator reached only through
//! the narrow [`ObjectStore`] trait, and a concrete backend is constructed by
//! the composition root and injected - never a process-wide singleton.
//!
//! "Key not found" is domain absence and is reported as `Ok(None)` from
//! [`ObjectStore::get`]; an [`ObjectStoreError`] always means infrastructure
//! failure.

pub mod fs;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

pub use fs::FsObjectStore;
pub use memory::MemoryObjectStore;

/// Failure talking to the backing store.
///
/// Never raised for a missing key.
#[derive(Debug, Error)]
pub enum ObjectStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid object key: {0}")]
    InvalidKey(String),
}

/// Narrow contract of the backing object store.
///
/// Each operation is a single atomic per-key action at the store; there are
/// no cross-key transactions and no coordination beyond that.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `bytes` under `key`, unconditionally replacing any prior
    /// content.
    async fn put(
        &self,
        key: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<(), ObjectStoreError>;

    /// Read the object at `key`. Returns `Ok(None)` when the key does not
    /// exist.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ObjectStoreError>;

    /// List all keys, in store order. No sort is guaranteed.
    async fn list(&self) -> Result<Vec<String>, ObjectStoreError>;

    /// Delete the object at `key`. Deleting a nonexistent key is not an
    /// error.
    async fn delete(&self, key: &str) -> Result<(), ObjectStoreError>;
}

/// Shared handle to a store backend.
pub type SharedObjectStore = Arc<dyn ObjectStore>;
