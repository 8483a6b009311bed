//! Password hashing and verification
//!
//! Hashes are Argon2id PHC strings. The salt travels inside the encoded
//! output, so hashes written by one process verify in any later process
//! regardless of the hasher instance that checks them.

use crate::error::{NotifyError, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Salted one-way credential hasher.
///
/// The salt is fixed at construction and reused for every `hash` call, so a
/// given instance hashes the same plaintext to the same string. Construct one
/// per process and pass it to whatever needs it; there is no global instance.
pub struct CredentialHasher {
    argon2: Argon2<'static>,
    salt: SaltString,
}

impl CredentialHasher {
    /// Create a hasher with a freshly generated random salt
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
            salt: SaltString::generate(&mut OsRng),
        }
    }

    /// Hash a plaintext password into an encoded Argon2id string
    pub fn hash(&self, plaintext: &str) -> Result<String> {
        self.argon2
            .hash_password(plaintext.as_bytes(), &self.salt)
            .map(|hash| hash.to_string())
            .map_err(|e| NotifyError::Hash(e.to_string()))
    }

    /// Check a plaintext password against an encoded hash.
    ///
    /// Never errors: malformed hash input and mismatches both return `false`.
    /// Verification reads the salt out of the encoded hash, not from this
    /// instance.
    pub fn verify(&self, hashed: &str, plaintext: &str) -> bool {
        match PasswordHash::new(hashed) {
            Ok(parsed) => self
                .argon2
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}
