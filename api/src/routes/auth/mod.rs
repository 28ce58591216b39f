//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints including:
//! - Registration and sign-in
//! - Token refresh
//! - Token revocation and verification
//! - Current user lookup

pub mod me;
pub mod refresh;
pub mod revoke;
pub mod signin;
pub mod signup;
pub mod verify;

use std::sync::Arc;

use ag_core::repositories::{TokenStore, UserRepository};
use ag_core::services::auth::{AuthService, PasswordHasher};

/// Application state shared across all auth handlers
pub struct AppState<U, H, S>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    S: TokenStore + 'static,
{
    pub auth_service: Arc<AuthService<U, H, S>>,
}
