//! # AuthGate Core
//!
//! Token lifecycle core for the AuthGate server: access token issuance and
//! verification, opaque refresh token rotation, revocation tracking and the
//! per-request gate that enforces them. Also holds the use-case layer the
//! HTTP handlers call and the capability traits infrastructure implements.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::{Claims, Identity, RefreshTokenRecord, TokenPair, User};
pub use errors::{AuthError, DomainError, DomainResult, ValidationError};
pub use repositories::{InMemoryTokenStore, TokenStore, UserRepository};
pub use services::{
    AccessGate, AuthContext, AuthGate, AuthService, PasswordHasher, TokenCleanupConfig,
    TokenCleanupService, TokenService, TokenServiceConfig,
};
