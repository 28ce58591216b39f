//! Authentication and token lifecycle configuration

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::environment::Environment;
use super::ConfigError;

/// Minimum signing secret length accepted outside development
pub const MIN_SECRET_LENGTH: usize = 32;

/// Longest token lifetime accepted from configuration (10 years)
pub const MAX_TOKEN_TTL_SECONDS: i64 = 10 * 365 * 24 * 3600;

/// JWT signing and expiry configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric HMAC secret used to sign access tokens
    pub secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds; `None` keeps refresh tokens valid until rotated
    pub refresh_token_expiry: Option<i64>,

    /// JWT issuer claim
    pub issuer: String,

    /// Whether `secret` was generated at startup rather than supplied
    #[serde(skip)]
    pub ephemeral_secret: bool,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: generate_ephemeral_secret(),
            access_token_expiry: 900,                  // 15 minutes
            refresh_token_expiry: Some(7 * 24 * 3600), // 7 days
            issuer: String::from("authgate"),
            ephemeral_secret: true,
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .field("issuer", &self.issuer)
            .field("ephemeral_secret", &self.ephemeral_secret)
            .finish()
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ephemeral_secret: false,
            ..Default::default()
        }
    }

    /// Set access token expiry in seconds
    pub fn with_access_expiry_seconds(mut self, seconds: i64) -> Self {
        self.access_token_expiry = seconds;
        self
    }

    /// Set refresh token expiry in seconds (`None` disables refresh expiry)
    pub fn with_refresh_expiry_seconds(mut self, seconds: Option<i64>) -> Self {
        self.refresh_token_expiry = seconds;
        self
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt cost factor for password hashing
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Seconds between revocation/refresh pruning runs; 0 disables pruning
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            bcrypt_cost: default_bcrypt_cost(),
            cleanup_interval_seconds: default_cleanup_interval(),
        }
    }
}

impl AuthConfig {
    /// Build the auth configuration from variables supplied by `lookup`
    ///
    /// `JWT_SECRET` is mandatory outside development. In development a random
    /// secret is generated when none is supplied, so tokens do not survive a restart.
    pub fn from_lookup<F>(env: Environment, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut jwt = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => {
                if env.requires_explicit_secret() && secret.len() < MIN_SECRET_LENGTH {
                    return Err(ConfigError::WeakSecret {
                        min: MIN_SECRET_LENGTH,
                    });
                }
                JwtConfig::new(secret)
            }
            None if env.requires_explicit_secret() => {
                return Err(ConfigError::Missing {
                    key: "JWT_SECRET".to_string(),
                });
            }
            None => JwtConfig::default(),
        };

        if let Some(ttl) = parse_var::<i64, _>(&lookup, "JWT_ACCESS_TOKEN_TTL")? {
            if !(0..=MAX_TOKEN_TTL_SECONDS).contains(&ttl) {
                return Err(ConfigError::InvalidValue {
                    key: "JWT_ACCESS_TOKEN_TTL".to_string(),
                    value: ttl.to_string(),
                });
            }
            jwt.access_token_expiry = ttl;
        }

        if let Some(ttl) = parse_var::<i64, _>(&lookup, "JWT_REFRESH_TOKEN_TTL")? {
            if ttl > MAX_TOKEN_TTL_SECONDS {
                return Err(ConfigError::InvalidValue {
                    key: "JWT_REFRESH_TOKEN_TTL".to_string(),
                    value: ttl.to_string(),
                });
            }
            jwt.refresh_token_expiry = if ttl <= 0 { None } else { Some(ttl) };
        }

        if let Some(issuer) = lookup("JWT_ISSUER").filter(|s| !s.is_empty()) {
            jwt.issuer = issuer;
        }

        let mut config = Self {
            jwt,
            ..Default::default()
        };

        if let Some(cost) = parse_var::<u32, _>(&lookup, "BCRYPT_COST")? {
            if !(4..=31).contains(&cost) {
                return Err(ConfigError::InvalidValue {
                    key: "BCRYPT_COST".to_string(),
                    value: cost.to_string(),
                });
            }
            config.bcrypt_cost = cost;
        }

        if let Some(interval) = parse_var::<u64, _>(&lookup, "TOKEN_CLEANUP_INTERVAL")? {
            config.cleanup_interval_seconds = interval;
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
        _ => Ok(None),
    }
}

/// 256 random bits, URL-safe base64
fn generate_ephemeral_secret() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

// Matches bcrypt::DEFAULT_COST
fn default_bcrypt_cost() -> u32 {
    12
}

fn default_cleanup_interval() -> u64 {
    300
}
