//! Main authentication service implementation

use std::sync::Arc;

use ag_shared::validation::{is_valid_email, normalize_email, not_empty};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{TokenStore, UserRepository};
use crate::services::gate::AuthContext;
use crate::services::token::TokenService;

use super::password::{PasswordHasher, MAX_PASSWORD_BYTES};

const DECOY_PASSWORD: &str = "authgate-decoy-password";

/// Authentication service for the email/password and token flows
pub struct AuthService<U, H, S>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
    S: TokenStore,
{
    /// Credential store
    user_repository: Arc<U>,
    /// Password hashing capability
    password_hasher: Arc<H>,
    /// Token service for JWT management
    token_service: Arc<TokenService<S>>,
    /// Digest checked when the email is unknown, so both sign-in failures cost one verify
    decoy_digest: Option<String>,
}

impl<U, H, S> AuthService<U, H, S>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
    S: TokenStore,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Credential store
    /// * `password_hasher` - Password hashing capability
    /// * `token_service` - Service for JWT token management
    ///
    /// Hashes one throwaway password on the calling thread.
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: Arc<H>,
        token_service: Arc<TokenService<S>>,
    ) -> Self {
        let decoy_digest = match password_hasher.hash(DECOY_PASSWORD) {
            Ok(digest) => Some(digest),
            Err(e) => {
                warn!("Could not prepare decoy digest for unknown accounts: {}", e);
                None
            }
        };

        Self {
            user_repository,
            password_hasher,
            token_service,
            decoy_digest,
        }
    }

    /// Register a new account
    ///
    /// The email is normalised before the uniqueness check, so addresses
    /// differing only in case or surrounding whitespace collide.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created account
    /// * `Err(DomainError::Validation)` - Missing fields, malformed email or overlong password
    /// * `Err(DomainError::Conflict)` - Email already registered
    pub async fn sign_up(&self, email: &str, password: &str) -> DomainResult<User> {
        let email = validate_credentials(email, password)?;

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        if password.len() > MAX_PASSWORD_BYTES {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                max: MAX_PASSWORD_BYTES,
            }
            .into());
        }

        let password_hash = self.hash_password(password).await?;
        let user = self
            .user_repository
            .create(User::new(email, password_hash))
            .await?;

        info!(user_id = %user.id, "Registered new user");
        Ok(user)
    }

    /// Verify credentials and issue a token pair
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn sign_in(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let email = validate_credentials(email, password)?;

        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                if let Some(digest) = &self.decoy_digest {
                    let _ = self.verify_password(password, digest).await;
                }
                warn!("Sign-in rejected: unknown account");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.verify_password(password, &user.password_hash).await? {
            warn!(user_id = %user.id, "Sign-in rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        self.token_service.issue(&user.identity())
    }

    /// Exchange a refresh token for a new pair
    ///
    /// The presented token is consumed before anything else happens, so it
    /// is dead even if the rest of the exchange fails.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New pair; the old refresh token no longer resolves
    /// * `Err(AuthError::InvalidRefreshToken)` - Unknown, used or expired token
    /// * `Err(DomainError::NotFound)` - Token owner no longer exists
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        if refresh_token.is_empty() {
            return Err(AuthError::InvalidRefreshToken.into());
        }

        let user_id = self
            .token_service
            .store()
            .take_refresh(refresh_token)
            .ok_or(AuthError::InvalidRefreshToken)?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                warn!(%user_id, "Refresh token owner no longer exists");
                DomainError::NotFound {
                    resource: "user".to_string(),
                }
            })?;

        let pair = self.token_service.issue(&user.identity())?;
        info!(user_id = %user.id, "Rotated refresh token");
        Ok(pair)
    }

    /// Revoke the access token the request was authenticated with
    pub fn revoke(&self, context: &AuthContext) {
        self.token_service
            .store()
            .revoke(&context.token, context.expires_at);
        info!(user_id = %context.user_id, "Revoked access token");
    }

    /// Look up the account behind an authenticated request
    pub async fn current_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "user".to_string(),
            })
    }

    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        let hasher = Arc::clone(&self.password_hasher);
        let password = password.to_string();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| {
                error!("Password hashing task failed: {}", e);
                DomainError::internal(format!("hashing task failed: {}", e))
            })?
    }

    async fn verify_password(&self, password: &str, digest: &str) -> DomainResult<bool> {
        let hasher = Arc::clone(&self.password_hasher);
        let password = password.to_string();
        let digest = digest.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| {
                error!("Password verification task failed: {}", e);
                DomainError::internal(format!("verification task failed: {}", e))
            })?
    }
}

/// Presence check shared by sign-up and sign-in; returns the normalised email
fn validate_credentials(email: &str, password: &str) -> Result<String, ValidationError> {
    if !not_empty(email) {
        return Err(ValidationError::RequiredField {
            field: "email".to_string(),
        });
    }

    if password.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "password".to_string(),
        });
    }

    Ok(normalize_email(email))
}
