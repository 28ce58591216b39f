//! bcrypt implementation of the PasswordHasher trait

use ag_core::errors::DomainError;
use ag_core::services::auth::PasswordHasher;
use tracing::error;

/// bcrypt password hasher with a fixed cost factor
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher; `cost` must be within bcrypt's 4..=31
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.cost).map_err(|e| {
            error!("Failed to hash password: {}", e);
            DomainError::internal(format!("password hashing failed: {}", e))
        })
    }

    fn verify(&self, password: &str, digest: &str) -> Result<bool, DomainError> {
        bcrypt::verify(password, digest).map_err(|e| {
            error!("Failed to verify password against stored digest: {}", e);
            DomainError::internal(format!("password verification failed: {}", e))
        })
    }
}
