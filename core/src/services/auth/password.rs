//! Password hashing capability

use crate::errors::DomainError;

/// Longest password accepted; bcrypt ignores every byte past this
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Adaptive one-way password hashing
///
/// Both operations are CPU-bound and blocking; callers on an async runtime
/// should move them off the executor.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing digest
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plaintext password against a digest produced by `hash`
    ///
    /// # Returns
    /// * `Ok(true)` - Password matches
    /// * `Ok(false)` - Password does not match
    /// * `Err(DomainError)` - Digest is malformed
    fn verify(&self, password: &str, digest: &str) -> Result<bool, DomainError>;
}
