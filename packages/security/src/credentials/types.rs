// ABOUTME: Credential record type definitions
// ABOUTME: A user id paired with its Argon2id PHC string

use serde::{Deserialize, Serialize};
use stratos_core::UserId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    pub user_id: UserId,
    pub password_hash: String,
}
