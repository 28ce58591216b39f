//! Configuration for the token service

use ag_shared::config::JwtConfig;

use crate::domain::entities::token::{
    ACCESS_TOKEN_EXPIRY_SECONDS, JWT_ISSUER, REFRESH_TOKEN_EXPIRY_SECONDS,
};

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// HMAC signing secret
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub access_token_ttl_seconds: i64,
    /// Refresh token lifetime in seconds; `None` keeps tokens valid until rotated
    pub refresh_token_ttl_seconds: Option<i64>,
    /// Issuer claim written into and required from every access token
    pub issuer: String,
}

impl TokenServiceConfig {
    /// Configuration with the given secret and default lifetimes
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            access_token_ttl_seconds: ACCESS_TOKEN_EXPIRY_SECONDS,
            refresh_token_ttl_seconds: Some(REFRESH_TOKEN_EXPIRY_SECONDS),
            issuer: JWT_ISSUER.to_string(),
        }
    }

    pub fn with_access_token_ttl(mut self, seconds: i64) -> Self {
        self.access_token_ttl_seconds = seconds;
        self
    }

    pub fn with_refresh_token_ttl(mut self, seconds: Option<i64>) -> Self {
        self.refresh_token_ttl_seconds = seconds;
        self
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            access_token_ttl_seconds: jwt.access_token_expiry,
            refresh_token_ttl_seconds: jwt.refresh_token_expiry,
            issuer: jwt.issuer.clone(),
        }
    }
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("jwt_secret", &"<redacted>")
            .field("access_token_ttl_seconds", &self.access_token_ttl_seconds)
            .field("refresh_token_ttl_seconds", &self.refresh_token_ttl_seconds)
            .field("issuer", &self.issuer)
            .finish()
    }
}
