//! Main token service implementation

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, error, info};

use crate::domain::entities::token::{Claims, TokenPair, REFRESH_TOKEN_BYTES};
use crate::domain::entities::user::Identity;
use crate::errors::{AuthError, DomainError};
use crate::repositories::TokenStore;

use super::config::TokenServiceConfig;

/// Only algorithm accepted for signing and verification
const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Service issuing signed access tokens and opaque refresh tokens
pub struct TokenService<S: TokenStore> {
    store: Arc<S>,
    config: TokenServiceConfig,
    access_token_ttl: Duration,
    refresh_token_ttl: Option<Duration>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<S: TokenStore> TokenService<S> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `store` - Token store receiving issued refresh tokens
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Internal` when the secret is
    /// empty or a lifetime is negative or out of range
    pub fn new(store: Arc<S>, config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::internal("JWT signing secret is empty"));
        }

        let access_token_ttl = lifetime(config.access_token_ttl_seconds, "access")?;
        let refresh_token_ttl = config
            .refresh_token_ttl_seconds
            .map(|seconds| lifetime(seconds, "refresh"))
            .transpose()?;

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // Expiry is checked by hand with zero leeway: a token is dead at `exp`, not after it
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub", "iss"]);
        validation.set_issuer(&[config.issuer.as_str()]);

        Ok(Self {
            store,
            config,
            access_token_ttl,
            refresh_token_ttl,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a new token pair and records the refresh token
    ///
    /// # Arguments
    ///
    /// * `identity` - The authenticated subject
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Signed access token plus fresh refresh token
    /// * `Err(DomainError::Internal)` - Signing failed or an expiry is out of range
    pub fn issue(&self, identity: &Identity) -> Result<TokenPair, DomainError> {
        let now = Utc::now();

        let claims =
            Claims::new_access_token(identity, now, self.access_token_ttl, &self.config.issuer)
                .ok_or_else(|| {
                    error!("Access token expiry overflows the calendar");
                    DomainError::internal("access token expiry out of range")
                })?;
        let access_token = self.encode_jwt(&claims)?;

        let refresh_expires_at = match self.refresh_token_ttl {
            Some(ttl) => Some(now.checked_add_signed(ttl).ok_or_else(|| {
                error!("Refresh token expiry overflows the calendar");
                DomainError::internal("refresh token expiry out of range")
            })?),
            None => None,
        };

        let refresh_token = generate_refresh_token();
        self.store
            .record_refresh(&refresh_token, identity.user_id, refresh_expires_at);

        info!(user_id = %identity.user_id, jti = %claims.jti, "Issued token pair");

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(SIGNING_ALGORITHM);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign access token: {}", e);
            DomainError::internal(format!("token signing failed: {}", e))
        })
    }

    /// Verifies an access token and returns its claims
    ///
    /// Checks signature, algorithm and issuer, then expiry. The revocation
    /// set is not consulted here.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(AuthError::TokenExpired)` - Well-formed token whose `exp` has passed
    /// * `Err(AuthError::InvalidToken)` - Anything else that fails verification
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => debug!("Rejected token: bad signature"),
                    ErrorKind::InvalidAlgorithm => debug!("Rejected token: unexpected algorithm"),
                    ErrorKind::InvalidIssuer => debug!("Rejected token: unexpected issuer"),
                    kind => debug!("Rejected token: {:?}", kind),
                }
                AuthError::InvalidToken
            })?;

        let claims = token_data.claims;
        if claims.is_expired_at(Utc::now()) {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }

    /// Access token lifetime
    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    /// Refresh token lifetime, `None` when refresh tokens never expire
    pub fn refresh_token_ttl(&self) -> Option<Duration> {
        self.refresh_token_ttl
    }

    /// Token store this service records refresh tokens in
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

fn lifetime(seconds: i64, kind: &str) -> Result<Duration, DomainError> {
    if seconds < 0 {
        return Err(DomainError::internal(format!("{} token lifetime is negative", kind)));
    }
    Duration::try_seconds(seconds)
        .ok_or_else(|| DomainError::internal(format!("{} token lifetime out of range", kind)))
}

/// Generates an opaque refresh token from the OS CSPRNG
///
/// 256 random bits, URL-safe base64 without padding (43 characters).
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
