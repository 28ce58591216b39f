//! Business services containing domain logic and use cases.

pub mod auth;
pub mod gate;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, PasswordHasher, MAX_PASSWORD_BYTES};
pub use gate::{extract_bearer, AccessGate, AuthContext, AuthGate};
pub use token::{
    generate_refresh_token, CleanupResult, TokenCleanupConfig, TokenCleanupService,
    TokenService, TokenServiceConfig,
};
