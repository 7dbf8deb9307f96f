// ABOUTME: Credential management module
// ABOUTME: Authenticator trait and its collection-backed Argon2id implementation

pub mod storage;
pub mod types;

pub use storage::CredentialStorage;
pub use types::CredentialRecord;
