//! Password hashing using argon2
//!
//! Provides secure password hashing and verification. Hashes are
//! self-describing PHC strings (algorithm, salt, and cost are embedded),
//! and a fresh random salt is generated per call so the same password
//! never hashes to the same string twice.
//!
//! # Performance Considerations
//!
//! Argon2 is intentionally CPU-intensive. The async wrappers offload the
//! work to the blocking thread pool so it never stalls the async runtime.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Password hashing service
///
/// Uses Argon2id which is the recommended variant for password hashing.
/// It provides resistance against both side-channel and GPU-based attacks.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using argon2 (blocking operation)
    pub fn hash(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    /// Hash a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on the blocking thread pool.
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored hash (blocking operation)
    ///
    /// The comparison inside argon2 is constant-time. A mismatch returns
    /// `Ok(false)`, never an error.
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;
        let argon2 = Argon2::default();
        Ok(argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}
