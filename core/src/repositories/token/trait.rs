//! Token store trait defining the interface for refresh-token and revocation state.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Keeper of refresh-token mappings and of the revoked access-token set
///
/// All operations are in-memory and non-suspending, so the trait is
/// synchronous. Implementations must be safe to share across request
/// workers; the two collections are independent and no operation spans both.
pub trait TokenStore: Send + Sync {
    /// Record a refresh token for `user_id`, overwriting any previous mapping
    ///
    /// # Arguments
    /// * `token` - Opaque refresh token string
    /// * `user_id` - Owner of the token
    /// * `expires_at` - Expiry instant, `None` for a token that lives until rotated
    fn record_refresh(&self, token: &str, user_id: Uuid, expires_at: Option<DateTime<Utc>>);

    /// Look up the owner of a refresh token
    ///
    /// # Returns
    /// * `Some(Uuid)` - Token is known and not expired
    /// * `None` - Token unknown, already rotated, or expired
    fn resolve_refresh(&self, token: &str) -> Option<Uuid>;

    /// Resolve and delete a refresh token in one step
    ///
    /// Two callers racing on the same token can never both get `Some`.
    fn take_refresh(&self, token: &str) -> Option<Uuid>;

    /// Remove a refresh token; removing an unknown token is a no-op
    fn delete_refresh(&self, token: &str);

    /// Check whether an access token has been revoked
    fn is_revoked(&self, access_token: &str) -> bool;

    /// Add an access token to the revocation set
    ///
    /// Idempotent. `expires_at` is the token's own expiry and is only used
    /// for pruning; re-revoking keeps the later of the two instants.
    fn revoke(&self, access_token: &str, expires_at: DateTime<Utc>);

    /// Drop revocation entries whose token expired at or before `now`
    ///
    /// # Returns
    /// Number of entries removed
    fn prune_revoked(&self, now: DateTime<Utc>) -> usize;

    /// Drop refresh tokens whose expiry is at or before `now`
    ///
    /// # Returns
    /// Number of tokens removed
    fn prune_expired_refresh(&self, now: DateTime<Utc>) -> usize;

    /// Number of live refresh-token records
    fn refresh_count(&self) -> usize;

    /// Number of revocation entries
    fn revoked_count(&self) -> usize;
}
