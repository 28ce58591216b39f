//! Domain layer containing business entities.

pub mod entities;

// Re-export commonly used domain types
pub use entities::{Claims, Identity, RefreshTokenRecord, TokenPair, User};
