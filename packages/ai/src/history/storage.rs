// ABOUTME: Analysis history storage layer over the collection persistence port
// ABOUTME: Keeps the whole log in memory and rewrites it on every append

use std::sync::Arc;

use stratos_core::UserId;
use stratos_storage::{load_collection, save_collection, CollectionKey, CollectionStore};
use tracing::debug;

use super::types::AnalysisRecord;
use crate::InsightResult;

pub struct AnalysisHistory {
    store: Arc<dyn CollectionStore>,
    records: Vec<AnalysisRecord>,
}

impl AnalysisHistory {
    /// Read the persisted log; a missing collection is an empty log
    pub async fn load(store: Arc<dyn CollectionStore>) -> InsightResult<Self> {
        let records: Vec<AnalysisRecord> =
            load_collection(store.as_ref(), CollectionKey::AnalysisHistory)
                .await?
                .unwrap_or_default();
        debug!("Loaded {} analysis records", records.len());
        Ok(Self { store, records })
    }

    /// Prepend `record` and persist the whole log
    pub async fn append(&mut self, record: AnalysisRecord) -> InsightResult<()> {
        let mut updated = Vec::with_capacity(self.records.len() + 1);
        updated.push(record);
        updated.extend(self.records.iter().cloned());

        save_collection(self.store.as_ref(), CollectionKey::AnalysisHistory, &updated).await?;
        self.records = updated;
        Ok(())
    }

    /// Every record, newest first
    pub fn all(&self) -> &[AnalysisRecord] {
        &self.records
    }

    /// Records belonging to `user_id`, newest first
    pub fn for_user(&self, user_id: UserId) -> Vec<&AnalysisRecord> {
        self.records
            .iter()
            .filter(|record| record.user_id == user_id)
            .collect()
    }

    pub fn latest_for(&self, user_id: UserId) -> Option<&AnalysisRecord> {
        self.records.iter().find(|record| record.user_id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnalysisResult, Sentiment};
    use stratos_storage::MemoryStore;

    fn output(summary: &str) -> AnalysisResult {
        AnalysisResult {
            summary: summary.to_string(),
            keywords: vec![],
            sentiment: Sentiment::Neutral,
            sentiment_detail: "Needs further evaluation".to_string(),
            action_items: vec![],
        }
    }

    #[tokio::test]
    async fn test_append_is_newest_first_and_filtered() {
        let store: Arc<dyn CollectionStore> = Arc::new(MemoryStore::new());
        let mut history = AnalysisHistory::load(store.clone()).await.unwrap();

        history
            .append(AnalysisRecord::new(1, "first", output("a")))
            .await
            .unwrap();
        history
            .append(AnalysisRecord::new(2, "other user", output("b")))
            .await
            .unwrap();
        history
            .append(AnalysisRecord::new(1, "second", output("c")))
            .await
            .unwrap();

        let mine: Vec<&str> = history
            .for_user(1)
            .iter()
            .map(|r| r.input.as_str())
            .collect();
        assert_eq!(mine, vec!["second", "first"]);
        assert_eq!(history.all().len(), 3);
        assert_eq!(history.latest_for(2).unwrap().input, "other user");
        assert!(history.latest_for(9).is_none());
    }

    #[tokio::test]
    async fn test_history_survives_reload() {
        let store: Arc<dyn CollectionStore> = Arc::new(MemoryStore::new());
        let mut history = AnalysisHistory::load(store.clone()).await.unwrap();
        history
            .append(AnalysisRecord::new(4, "Dashboard numbers look great", output("x")))
            .await
            .unwrap();

        let reloaded = AnalysisHistory::load(store).await.unwrap();
        assert_eq!(reloaded.all(), history.all());
    }

    #[tokio::test]
    async fn test_persisted_blob_uses_camel_case() {
        let store: Arc<dyn CollectionStore> = Arc::new(MemoryStore::new());
        let mut history = AnalysisHistory::load(store.clone()).await.unwrap();
        history
            .append(AnalysisRecord::new(1, "notes", output("s")))
            .await
            .unwrap();

        let blob = store
            .read(CollectionKey::AnalysisHistory)
            .await
            .unwrap()
            .unwrap();
        assert!(blob.contains("\"userId\""));
        assert!(blob.contains("\"sentimentDetail\""));
        assert!(blob.contains("\"actionItems\""));
    }
}
