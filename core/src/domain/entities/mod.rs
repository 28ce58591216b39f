//! Domain entities representing core business objects.

pub mod token;
pub mod user;

// Re-export commonly used types
pub use token::{
    Claims, RefreshTokenRecord, TokenPair,
    ACCESS_TOKEN_EXPIRY_SECONDS, REFRESH_TOKEN_BYTES, REFRESH_TOKEN_EXPIRY_SECONDS, JWT_ISSUER,
};
pub use user::{Identity, User};
