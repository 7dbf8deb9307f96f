// ABOUTME: Shared helpers for workspace integration tests
// ABOUTME: Builds file-backed workspaces in temp directories with cheap hashing

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use stratos_projects::{
    CollectionStore, CredentialStorage, InsightService, JsonFileStore, PasswordHashing, Workspace,
};
use tempfile::TempDir;

pub const DEMO_PASSWORD: &str = "demo-pass";

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub async fn open_workspace(store: Arc<dyn CollectionStore>) -> Workspace {
    let authenticator = Arc::new(CredentialStorage::with_hashing(
        store.clone(),
        PasswordHashing::insecure_fast(),
    ));
    Workspace::open_with(
        store,
        authenticator,
        InsightService::new().with_delay(Duration::ZERO),
    )
    .await
    .unwrap()
}

/// File-backed workspace in a fresh temp dir. Keep the `TempDir` alive for
/// the duration of the test.
pub async fn file_workspace() -> (TempDir, Arc<dyn CollectionStore>, Workspace) {
    let temp_dir = TempDir::new().unwrap();
    let store: Arc<dyn CollectionStore> = Arc::new(JsonFileStore::new(temp_dir.path()));
    let ws = open_workspace(store.clone()).await;
    (temp_dir, store, ws)
}
