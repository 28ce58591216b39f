//! In-process token store backed by two reader-writer locked maps

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;

use super::r#trait::TokenStore;

/// In-memory token store; state is lost on restart
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    refresh_tokens: RwLock<HashMap<String, RefreshTokenRecord>>,
    revoked_tokens: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl InMemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn record_refresh(&self, token: &str, user_id: Uuid, expires_at: Option<DateTime<Utc>>) {
        let record = RefreshTokenRecord::new(user_id, Utc::now(), expires_at);
        self.refresh_tokens.write().insert(token.to_string(), record);
    }

    fn resolve_refresh(&self, token: &str) -> Option<Uuid> {
        let now = Utc::now();
        self.refresh_tokens
            .read()
            .get(token)
            .filter(|record| !record.is_expired_at(now))
            .map(|record| record.user_id)
    }

    fn take_refresh(&self, token: &str) -> Option<Uuid> {
        let now = Utc::now();
        let record = self.refresh_tokens.write().remove(token)?;

        if record.is_expired_at(now) {
            return None;
        }

        Some(record.user_id)
    }

    fn delete_refresh(&self, token: &str) {
        self.refresh_tokens.write().remove(token);
    }

    fn is_revoked(&self, access_token: &str) -> bool {
        self.revoked_tokens.read().contains_key(access_token)
    }

    fn revoke(&self, access_token: &str, expires_at: DateTime<Utc>) {
        let mut revoked = self.revoked_tokens.write();
        revoked
            .entry(access_token.to_string())
            .and_modify(|existing| {
                if expires_at > *existing {
                    *existing = expires_at;
                }
            })
            .or_insert(expires_at);
    }

    fn prune_revoked(&self, now: DateTime<Utc>) -> usize {
        let mut revoked = self.revoked_tokens.write();
        let before = revoked.len();
        revoked.retain(|_, expires_at| *expires_at > now);
        before - revoked.len()
    }

    fn prune_expired_refresh(&self, now: DateTime<Utc>) -> usize {
        let mut tokens = self.refresh_tokens.write();
        let before = tokens.len();
        tokens.retain(|_, record| !record.is_expired_at(now));
        before - tokens.len()
    }

    fn refresh_count(&self) -> usize {
        self.refresh_tokens.read().len()
    }

    fn revoked_count(&self) -> usize {
        self.revoked_tokens.read().len()
    }
}
