// ABOUTME: Password hashing using Argon2id
// ABOUTME: Produces self-describing PHC strings; plaintext never leaves this module

use argon2::password_hash::{self, PasswordHash, SaltString};
use argon2::{Algorithm, Argon2, Params, ParamsBuilder, PasswordHasher, PasswordVerifier, Version};
use rand::RngCore;

use crate::{SecurityError, SecurityResult};

/// Salt size in bytes
const SALT_SIZE: usize = 16;

/// Argon2id password hasher
#[derive(Debug, Clone)]
pub struct PasswordHashing {
    params: Params,
}

impl Default for PasswordHashing {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl PasswordHashing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher with explicit cost parameters (memory in KiB, iterations, lanes)
    pub fn with_cost(m_cost: u32, t_cost: u32, p_cost: u32) -> SecurityResult<Self> {
        let params = ParamsBuilder::new()
            .m_cost(m_cost)
            .t_cost(t_cost)
            .p_cost(p_cost)
            .build()
            .map_err(|e| SecurityError::Hash(format!("Invalid Argon2 params: {}", e)))?;
        Ok(Self { params })
    }

    /// Minimum-cost hasher so test suites stay fast. Never use for real accounts.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn insecure_fast() -> Self {
        Self::with_cost(Params::MIN_M_COST, 1, 1).expect("minimum Argon2 params are valid")
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash `password` with a fresh random salt
    pub fn hash(&self, password: &str) -> SecurityResult<String> {
        let mut salt = [0u8; SALT_SIZE];
        rand::thread_rng().fill_bytes(&mut salt);

        let salt = SaltString::encode_b64(&salt)
            .map_err(|e| SecurityError::Hash(format!("Failed to encode salt: {}", e)))?;

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| SecurityError::Hash(format!("Failed to hash password: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Check `password` against a stored PHC string
    pub fn verify(&self, password: &str, stored: &str) -> SecurityResult<bool> {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| SecurityError::Hash(format!("Malformed password hash: {}", e)))?;

        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(SecurityError::Hash(format!("Failed to verify password: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let hashing = PasswordHashing::insecure_fast();
        let hash = hashing.hash("password123").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("password123"));
    }

    #[test]
    fn test_verify_accepts_correct_password() {
        let hashing = PasswordHashing::insecure_fast();
        let hash = hashing.hash("password123").unwrap();

        assert!(hashing.verify("password123", &hash).unwrap());
        assert!(!hashing.verify("password124", &hash).unwrap());
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hashing = PasswordHashing::insecure_fast();
        let first = hashing.hash("password123").unwrap();
        let second = hashing.hash("password123").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let hashing = PasswordHashing::insecure_fast();
        let result = hashing.verify("password123", "password123");

        assert!(matches!(result, Err(SecurityError::Hash(_))));
    }

    #[test]
    fn test_with_cost_rejects_invalid_params() {
        assert!(PasswordHashing::with_cost(0, 0, 0).is_err());
    }
}
