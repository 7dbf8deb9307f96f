// ABOUTME: Credential storage layer over the collection persistence port
// ABOUTME: Enrolls, verifies and revokes passwords as Argon2id hashes

use async_trait::async_trait;
use std::sync::Arc;
use stratos_core::UserId;
use stratos_storage::{load_collection, save_collection, CollectionKey, CollectionStore};
use tracing::debug;

use super::types::CredentialRecord;
use crate::passwords::PasswordHashing;
use crate::{Authenticator, SecurityResult};

/// Authenticator keeping hashed credentials in the `credentials` collection
pub struct CredentialStorage {
    store: Arc<dyn CollectionStore>,
    hashing: PasswordHashing,
}

impl CredentialStorage {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self::with_hashing(store, PasswordHashing::default())
    }

    pub fn with_hashing(store: Arc<dyn CollectionStore>, hashing: PasswordHashing) -> Self {
        Self { store, hashing }
    }

    async fn records(&self) -> SecurityResult<Vec<CredentialRecord>> {
        Ok(load_collection(self.store.as_ref(), CollectionKey::Credentials)
            .await?
            .unwrap_or_default())
    }

    async fn save(&self, records: &[CredentialRecord]) -> SecurityResult<()> {
        save_collection(self.store.as_ref(), CollectionKey::Credentials, records).await?;
        Ok(())
    }
}

#[async_trait]
impl Authenticator for CredentialStorage {
    async fn enroll(&self, user_id: UserId, password: &str) -> SecurityResult<()> {
        debug!("Enrolling credentials for user: {}", user_id);

        let password_hash = self.hashing.hash(password)?;
        let mut records = self.records().await?;

        match records.iter_mut().find(|r| r.user_id == user_id) {
            Some(existing) => existing.password_hash = password_hash,
            None => records.push(CredentialRecord {
                user_id,
                password_hash,
            }),
        }

        self.save(&records).await
    }

    async fn verify(&self, user_id: UserId, password: &str) -> SecurityResult<bool> {
        let records = self.records().await?;

        match records.iter().find(|r| r.user_id == user_id) {
            Some(record) => self.hashing.verify(password, &record.password_hash),
            None => {
                debug!("No credentials enrolled for user: {}", user_id);
                Ok(false)
            }
        }
    }

    async fn revoke(&self, user_id: UserId) -> SecurityResult<()> {
        let mut records = self.records().await?;
        let before = records.len();
        records.retain(|r| r.user_id != user_id);

        if records.len() != before {
            debug!("Revoked credentials for user: {}", user_id);
            self.save(&records).await?;
        }
        Ok(())
    }
}
