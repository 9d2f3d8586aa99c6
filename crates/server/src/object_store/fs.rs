//! Filesystem-backed object store.
//!
//! One file per key under a configured bucket directory. This is the
//! production backend when the service runs against a local volume; the
//! directory plays the role of the bucket and is supplied by configuration.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{ObjectStore, ObjectStoreError};

/// Object store writing each key as a flat file under a root directory.
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    /// Create a store rooted at `root`. The directory must already exist.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store rooted at `root`, creating the directory if missing.
    ///
    /// # Errors
    ///
    /// Returns `ObjectStoreError::Io` if the directory cannot be created.
    pub async fn create(root: impl Into<PathBuf>) -> Result<Self, ObjectStoreError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Resolve a key to its path, rejecting keys that would escape the root.
    fn path_for(&self, key: &str) -> Result<PathBuf, ObjectStoreError> {
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(ObjectStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }

    /// The bucket directory backing this store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn put(
        &self,
        key: &str,
        bytes: &[u8],
        _content_type: &str,
    ) -> Result<(), ObjectStoreError> {
        // A plain file has nowhere to record the content type; it is part of
        // the collaborator contract and recorded by real bucket backends.
        let path = self.path_for(key)?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ObjectStoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self) -> Result<Vec<String>, ObjectStoreError> {
        let mut keys = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file()
                && let Some(name) = entry.file_name().to_str()
            {
                keys.push(name.to_string());
            }
        }
        Ok(keys)
    }

    async fn delete(&self, key: &str) -> Result<(), ObjectStoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn store() -> (tempfile::TempDir, FsObjectStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::create(dir.path().join("bucket"))
            .await
            .unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let (_dir, store) = store().await;

        store
            .put("a.json", b"{\"x\":1}", "application/json")
            .await
            .unwrap();
        let bytes = store.get("a.json").await.unwrap();
        assert_eq!(bytes.as_deref(), Some(b"{\"x\":1}".as_slice()));
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let (_dir, store) = store().await;

        store.put("a.json", b"old", "application/json").await.unwrap();
        store.put("a.json", b"new", "application/json").await.unwrap();

        let bytes = store.get("a.json").await.unwrap();
        assert_eq!(bytes.as_deref(), Some(b"new".as_slice()));
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let (_dir, store) = store().await;
        assert!(store.get("missing.json").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_returns_all_keys() {
        let (_dir, store) = store().await;

        store.put("a.json", b"a", "application/json").await.unwrap();
        store.put("b.json", b"b", "application/json").await.unwrap();

        let mut keys = store.list().await.unwrap();
        keys.sort();
        assert_eq!(keys, ["a.json", "b.json"]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (_dir, store) = store().await;

        store.put("a.json", b"a", "application/json").await.unwrap();
        store.delete("a.json").await.unwrap();
        store.delete("a.json").await.unwrap();

        assert!(store.get("a.json").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let (_dir, store) = store().await;

        let err = store.get("../escape").await.unwrap_err();
        assert!(matches!(err, ObjectStoreError::InvalidKey(_)));
    }
}
