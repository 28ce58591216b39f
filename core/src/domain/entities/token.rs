//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::Identity;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 15 * 60;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_SECONDS: i64 = 7 * 24 * 3600;

/// Default JWT issuer
pub const JWT_ISSUER: &str = "authgate";

/// Random bytes behind every refresh token (256 bits)
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Claims structure for the access token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Subject email at issuance time
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID, unique per issued token
    pub jti: String,
}

impl Claims {
    /// Creates new access token claims for `identity`
    ///
    /// # Arguments
    ///
    /// * `identity` - The authenticated subject
    /// * `issued_at` - Issuance instant
    /// * `ttl` - Lifetime of the token
    /// * `issuer` - Issuer claim
    ///
    /// Returns `None` when the expiry instant is not representable.
    pub fn new_access_token(
        identity: &Identity,
        issued_at: DateTime<Utc>,
        ttl: Duration,
        issuer: &str,
    ) -> Option<Self> {
        let expiry = issued_at.checked_add_signed(ttl)?;

        Some(Self {
            sub: identity.user_id.to_string(),
            email: identity.email.clone(),
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        })
    }

    /// `true` once `now` has reached the expiry instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Expiry as a timestamp
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Server-side record behind an opaque refresh token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTokenRecord {
    /// User ID this token belongs to
    pub user_id: Uuid,

    /// Timestamp when the token was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the token expires; `None` means it lives until rotated
    pub expires_at: Option<DateTime<Utc>>,
}

impl RefreshTokenRecord {
    pub fn new(user_id: Uuid, issued_at: DateTime<Utc>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            user_id,
            issued_at,
            expires_at,
        }
    }

    /// Checks if the refresh token has expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(expires_at) if now >= expires_at)
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Opaque refresh token
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity::new(Uuid::new_v4(), "a@x.com")
    }

    #[test]
    fn test_access_claims_carry_identity() {
        let identity = identity();
        let now = Utc::now();
        let claims = Claims::new_access_token(&identity, now, Duration::minutes(15), JWT_ISSUER)
            .unwrap();

        assert_eq!(claims.user_id().unwrap(), identity.user_id);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_EXPIRY_SECONDS);
        assert_eq!(claims.iss, JWT_ISSUER);
        assert!(!claims.is_expired_at(now));
        assert!(claims.is_expired_at(now + Duration::minutes(15)));
    }

    #[test]
    fn test_claims_have_unique_jti() {
        let identity = identity();
        let now = Utc::now();
        let a = Claims::new_access_token(&identity, now, Duration::minutes(1), JWT_ISSUER).unwrap();
        let b = Claims::new_access_token(&identity, now, Duration::minutes(1), JWT_ISSUER).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_zero_ttl_is_expired_immediately() {
        let now = Utc::now();
        let claims = Claims::new_access_token(&identity(), now, Duration::zero(), JWT_ISSUER)
            .unwrap();
        assert!(claims.is_expired_at(now));
    }

    #[test]
    fn test_unrepresentable_expiry_is_none() {
        let ttl = Duration::try_seconds(i64::MAX / 1000).unwrap();
        assert!(Claims::new_access_token(&identity(), Utc::now(), ttl, JWT_ISSUER).is_none());
    }

    #[test]
    fn test_refresh_record_expiry() {
        let now = Utc::now();
        let user_id = Uuid::new_v4();

        let open_ended = RefreshTokenRecord::new(user_id, now, None);
        assert!(!open_ended.is_expired_at(now + Duration::days(365)));

        let bounded = RefreshTokenRecord::new(user_id, now, Some(now + Duration::days(7)));
        assert!(!bounded.is_expired_at(now + Duration::days(6)));
        assert!(bounded.is_expired_at(now + Duration::days(7)));
    }
}
