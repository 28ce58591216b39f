//! Authentication service module
//!
//! This module provides the use cases behind the HTTP surface:
//! - Email/password registration and sign-in
//! - Refresh token rotation
//! - Access token revocation
//! - Current user lookup

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::{PasswordHasher, MAX_PASSWORD_BYTES};
pub use service::AuthService;
