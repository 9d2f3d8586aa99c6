//! Storage adapter mapping addresses onto the object store.
//!
//! Each address lives under the key `<id>.json`, body = the entity's wire
//! JSON. The adapter is the sole authority for what exists; values returned
//! to callers are snapshots, not live references.
//!
//! Writes are unconditional (last-write-wins): there is no existence check
//! and no optimistic-concurrency token, so concurrent updates to the same id
//! resolve to whichever write lands last. This is a known limitation kept on
//! purpose - adding version checks would change observable behavior.

use addressbook_core::{Address, AddressId};
use thiserror::Error;

use crate::object_store::{ObjectStoreError, SharedObjectStore};

const KEY_SUFFIX: &str = ".json";
const CONTENT_TYPE: &str = "application/json";

/// Infrastructure failure while persisting or loading addresses.
///
/// Distinct from domain absence: a missing record is `Ok(None)` from
/// [`AddressStorage::find_by_id`], never an error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store failed.
    #[error("object store error: {0}")]
    Store(#[from] ObjectStoreError),

    /// A stored blob could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Repository for address persistence operations.
#[derive(Clone)]
pub struct AddressStorage {
    store: SharedObjectStore,
}

impl AddressStorage {
    /// Create a new storage adapter over an injected store backend.
    #[must_use]
    pub fn new(store: SharedObjectStore) -> Self {
        Self { store }
    }

    /// Storage key for an address id: `<id>.json`.
    ///
    /// The rule is reversible; distinct ids never collide.
    fn object_key(id: &AddressId) -> String {
        format!("{id}{KEY_SUFFIX}")
    }

    /// Store an address, silently replacing any prior content under its id.
    ///
    /// Returns the stored value unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the backing write fails.
    /// Never retried.
    pub async fn store(&self, address: &Address) -> Result<Address, StorageError> {
        let key = Self::object_key(&address.id);
        let json = serde_json::to_vec(address)?;
        self.store.put(&key, &json, CONTENT_TYPE).await?;
        tracing::debug!(id = %address.id, "stored address");
        Ok(address.clone())
    }

    /// Look up an address by id. `Ok(None)` means the record does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for backing-store failures or a corrupt blob.
    pub async fn find_by_id(&self, id: &AddressId) -> Result<Option<Address>, StorageError> {
        let key = Self::object_key(id);
        let Some(bytes) = self.store.get(&key).await? else {
            tracing::debug!(%id, "address not found");
            return Ok(None);
        };
        let address = serde_json::from_slice(&bytes)?;
        tracing::debug!(%id, "found address");
        Ok(Some(address))
    }

    /// Retrieve all addresses, in store-listing order.
    ///
    /// Records that disappear between list and read are silently dropped;
    /// the listing offers no isolation against concurrent writes. Keys that
    /// do not carry the `.json` suffix are skipped.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the listing or any read fails.
    pub async fn find_all(&self) -> Result<Vec<Address>, StorageError> {
        let keys = self.store.list().await?;

        let mut addresses = Vec::with_capacity(keys.len());
        for key in keys {
            let Some(id) = key.strip_suffix(KEY_SUFFIX) else {
                continue;
            };
            if let Some(address) = self.find_by_id(&AddressId::new(id)).await? {
                addresses.push(address);
            }
        }

        tracing::debug!(count = addresses.len(), "retrieved addresses");
        Ok(addresses)
    }

    /// Persist an updated address.
    ///
    /// Identical mechanics to [`store`](Self::store) - the caller has already
    /// confirmed prior existence; the adapter itself enforces no precondition.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the backing write fails.
    pub async fn update(&self, address: &Address) -> Result<Address, StorageError> {
        let key = Self::object_key(&address.id);
        let json = serde_json::to_vec(address)?;
        self.store.put(&key, &json, CONTENT_TYPE).await?;
        tracing::debug!(id = %address.id, "updated address");
        Ok(address.clone())
    }

    /// Delete the address with the given id. Idempotent: removing a
    /// nonexistent id is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing delete fails.
    pub async fn remove(&self, id: &AddressId) -> Result<(), StorageError> {
        let key = Self::object_key(id);
        self.store.delete(&key).await?;
        tracing::debug!(%id, "removed address");
        Ok(())
    }
}
