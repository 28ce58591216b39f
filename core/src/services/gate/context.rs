//! Authenticated identity handed to protected handlers

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::Identity;
use crate::errors::AuthError;

/// User authentication context produced by a successful gate check
#[derive(Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// User ID extracted from the `sub` claim
    pub user_id: Uuid,
    /// Email carried in the token
    pub email: String,
    /// Expiry of the presented token
    pub expires_at: DateTime<Utc>,
    /// The presented access token, needed to revoke it
    pub token: String,
}

impl AuthContext {
    /// Creates a new authentication context from validated claims
    pub fn from_claims(claims: Claims, token: &str) -> Result<Self, AuthError> {
        let user_id = claims.user_id().map_err(|_| AuthError::InvalidToken)?;
        let expires_at = claims.expires_at();

        Ok(Self {
            user_id,
            email: claims.email,
            expires_at,
            token: token.to_string(),
        })
    }

    pub fn identity(&self) -> Identity {
        Identity::new(self.user_id, self.email.clone())
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("expires_at", &self.expires_at)
            .field("token", &"<redacted>")
            .finish()
    }
}
