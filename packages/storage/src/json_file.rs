// ABOUTME: File-backed collection store
// ABOUTME: One pretty-printed <key>.json file per collection under a data directory

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::{CollectionKey, CollectionStore, StorageResult};

/// Stores each collection as `<root>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at ~/.stratos
    pub fn default_location() -> Self {
        Self::new(stratos_core::stratos_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn collection_path(&self, key: CollectionKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }

    /// Ensures the data directory exists
    async fn ensure_root(&self) -> StorageResult<()> {
        if fs::metadata(&self.root).await.is_err() {
            debug!("Creating StratOS data directory: {:?}", self.root);
            fs::create_dir_all(&self.root).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl CollectionStore for JsonFileStore {
    async fn read(&self, key: CollectionKey) -> StorageResult<Option<String>> {
        let path = self.collection_path(key);
        debug!("Reading collection from: {:?}", path);

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: CollectionKey, blob: String) -> StorageResult<()> {
        self.ensure_root().await?;

        let path = self.collection_path(key);
        debug!("Writing collection to: {:?}", path);
        fs::write(&path, blob).await?;
        Ok(())
    }

    async fn remove(&self, key: CollectionKey) -> StorageResult<()> {
        let path = self.collection_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Removed collection file: {:?}", path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
