//! Per-request authentication protocol

use std::sync::Arc;

use tracing::debug;

use crate::errors::AuthError;
use crate::repositories::TokenStore;
use crate::services::token::TokenService;

use super::context::AuthContext;

/// Extracts the token from an `Authorization` header value
///
/// The header must be exactly `<scheme> <token>` separated by one space,
/// with the scheme matching `bearer` in any case and a non-empty token.
pub fn extract_bearer(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    let scheme = parts.next()?;
    let token = parts.next()?;

    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}

/// Object-safe view of the gate so the HTTP layer can hold it without the store's type
pub trait AccessGate: Send + Sync {
    /// Checks an `Authorization` header value, `None` when the header is absent
    fn check(&self, authorization: Option<&str>) -> Result<AuthContext, AuthError>;
}

/// Gate deciding whether a request carries a usable access token
pub struct AuthGate<S: TokenStore> {
    token_service: Arc<TokenService<S>>,
    store: Arc<S>,
}

impl<S: TokenStore> AuthGate<S> {
    pub fn new(token_service: Arc<TokenService<S>>, store: Arc<S>) -> Self {
        Self {
            token_service,
            store,
        }
    }

    /// Runs the gate protocol
    ///
    /// Order is fixed: credential presence, then revocation, then signature
    /// and expiry. A revoked token is reported as revoked even if it has
    /// also expired.
    pub fn check(&self, authorization: Option<&str>) -> Result<AuthContext, AuthError> {
        let token = authorization
            .and_then(extract_bearer)
            .ok_or(AuthError::TokenRequired)?;

        if self.store.is_revoked(token) {
            debug!("Gate rejected revoked token");
            return Err(AuthError::TokenRevoked);
        }

        let claims = self.token_service.validate(token)?;
        let context = AuthContext::from_claims(claims, token)?;

        debug!(user_id = %context.user_id, "Gate accepted token");
        Ok(context)
    }
}

impl<S: TokenStore> AccessGate for AuthGate<S> {
    fn check(&self, authorization: Option<&str>) -> Result<AuthContext, AuthError> {
        AuthGate::check(self, authorization)
    }
}
