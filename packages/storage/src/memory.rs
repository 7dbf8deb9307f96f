// ABOUTME: In-memory collection store
// ABOUTME: Keeps blobs in a map; used by tests and embedders that persist elsewhere

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{CollectionKey, CollectionStore, StorageResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RwLock<HashMap<CollectionKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collections currently held
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn read(&self, key: CollectionKey) -> StorageResult<Option<String>> {
        Ok(self.blobs.read().await.get(&key).cloned())
    }

    async fn write(&self, key: CollectionKey, blob: String) -> StorageResult<()> {
        self.blobs.write().await.insert(key, blob);
        Ok(())
    }

    async fn remove(&self, key: CollectionKey) -> StorageResult<()> {
        self.blobs.write().await.remove(&key);
        Ok(())
    }
}
