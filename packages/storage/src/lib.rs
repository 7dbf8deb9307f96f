// ABOUTME: Persistence port for StratOS collections
// ABOUTME: Whole-collection JSON blobs keyed by collection name, with file and memory backends

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::debug;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Collection '{key}' is unreadable: {source}")]
    Corrupt {
        key: CollectionKey,
        #[source]
        source: serde_json::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Names of the independently persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    CurrentUser,
    Users,
    Projects,
    Tasks,
    AnalysisHistory,
    Credentials,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 6] = [
        CollectionKey::CurrentUser,
        CollectionKey::Users,
        CollectionKey::Projects,
        CollectionKey::Tasks,
        CollectionKey::AnalysisHistory,
        CollectionKey::Credentials,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::CurrentUser => "currentUser",
            CollectionKey::Users => "users",
            CollectionKey::Projects => "projects",
            CollectionKey::Tasks => "tasks",
            CollectionKey::AnalysisHistory => "analysisHistory",
            CollectionKey::Credentials => "credentials",
        }
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistence port: every implementation reads and writes a whole collection at a time
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Raw blob stored under `key`, or `None` if nothing was ever written
    async fn read(&self, key: CollectionKey) -> StorageResult<Option<String>>;

    /// Replace the blob stored under `key`
    async fn write(&self, key: CollectionKey, blob: String) -> StorageResult<()>;

    /// Forget `key`. Removing an absent key succeeds.
    async fn remove(&self, key: CollectionKey) -> StorageResult<()>;
}

/// Reads and decodes the collection stored under `key`
pub async fn load_collection<T: DeserializeOwned>(
    store: &dyn CollectionStore,
    key: CollectionKey,
) -> StorageResult<Option<T>> {
    match store.read(key).await? {
        Some(blob) => {
            let value = serde_json::from_str(&blob)
                .map_err(|source| StorageError::Corrupt { key, source })?;
            debug!("Loaded collection '{}' ({} bytes)", key, blob.len());
            Ok(Some(value))
        }
        None => {
            debug!("Collection '{}' not present", key);
            Ok(None)
        }
    }
}

/// Encodes `value` and rewrites the collection stored under `key`
pub async fn save_collection<T: Serialize + ?Sized>(
    store: &dyn CollectionStore,
    key: CollectionKey,
    value: &T,
) -> StorageResult<()> {
    let blob = serde_json::to_string_pretty(value)?;
    debug!("Writing collection '{}' ({} bytes)", key, blob.len());
    store.write(key, blob).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collection_keys_match_blob_names() {
        let names: Vec<&str> = CollectionKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "currentUser",
                "users",
                "projects",
                "tasks",
                "analysisHistory",
                "credentials"
            ]
        );
    }

    #[tokio::test]
    async fn test_load_missing_collection_is_none() {
        let store = MemoryStore::new();
        let loaded: Option<Vec<u32>> = load_collection(&store, CollectionKey::Tasks)
            .await
            .unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_collection() {
        let store = MemoryStore::new();
        save_collection(&store, CollectionKey::Users, &vec!["a", "b"])
            .await
            .unwrap();

        let loaded: Option<Vec<String>> = load_collection(&store, CollectionKey::Users)
            .await
            .unwrap();
        assert_eq!(loaded, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[tokio::test]
    async fn test_corrupt_collection_reports_key() {
        let store = MemoryStore::new();
        store
            .write(CollectionKey::Projects, "{not json".to_string())
            .await
            .unwrap();

        let err = load_collection::<Vec<u32>>(&store, CollectionKey::Projects)
            .await
            .unwrap_err();
        match err {
            StorageError::Corrupt { key, .. } => assert_eq!(key, CollectionKey::Projects),
            other => panic!("unexpected error: {other}"),
        }
    }
}
