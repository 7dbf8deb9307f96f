// ABOUTME: Credential handling for StratOS
// ABOUTME: Authenticator port plus Argon2id hashing; user records never carry passwords

use async_trait::async_trait;
use stratos_core::UserId;
use stratos_storage::StorageError;
use thiserror::Error;

pub mod credentials;
pub mod passwords;

// Re-export main types for convenience
pub use credentials::{CredentialRecord, CredentialStorage};
pub use passwords::PasswordHashing;

#[derive(Debug, Error)]
pub enum SecurityError {
    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Credential storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type SecurityResult<T> = Result<T, SecurityError>;

/// Boundary to whatever provider owns user credentials
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Store (or replace) the credential for `user_id`
    async fn enroll(&self, user_id: UserId, password: &str) -> SecurityResult<()>;

    /// `Ok(false)` for a wrong password or an unknown user
    async fn verify(&self, user_id: UserId, password: &str) -> SecurityResult<bool>;

    async fn revoke(&self, user_id: UserId) -> SecurityResult<()>;
}
