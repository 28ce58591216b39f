//! Token cleanup service for periodic pruning of the token store
//!
//! Revocation entries are only needed until the revoked token would have
//! expired anyway; refresh tokens are only needed until their configured
//! expiry. This service drops both on a fixed interval.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::repositories::TokenStore;

/// Configuration for token cleanup service
#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 300,
            enabled: true,
        }
    }
}

impl TokenCleanupConfig {
    /// Cleanup every `interval_seconds`; an interval of 0 disables cleanup
    pub fn with_interval(interval_seconds: u64) -> Self {
        Self {
            interval_seconds,
            enabled: interval_seconds > 0,
        }
    }
}

/// Service for pruning expired revocation entries and refresh tokens
pub struct TokenCleanupService<S: TokenStore + 'static> {
    store: Arc<S>,
    config: TokenCleanupConfig,
}

impl<S: TokenStore> TokenCleanupService<S> {
    /// Create a new token cleanup service
    pub fn new(store: Arc<S>, config: TokenCleanupConfig) -> Self {
        Self { store, config }
    }

    /// Run a single cleanup cycle
    ///
    /// A pruned revocation entry belongs to a token that has already expired,
    /// so the gate keeps rejecting it, as expired rather than revoked.
    pub fn run_cleanup(&self) -> CleanupResult {
        if !self.config.enabled {
            return CleanupResult::default();
        }

        let now = Utc::now();
        let result = CleanupResult {
            revoked_entries_pruned: self.store.prune_revoked(now),
            expired_refresh_tokens_pruned: self.store.prune_expired_refresh(now),
        };

        if result.total_cleaned() > 0 {
            info!(
                "Token cleanup completed - Revoked: {}, Refresh: {}",
                result.revoked_entries_pruned, result.expired_refresh_tokens_pruned
            );
        } else {
            debug!("Token cleanup completed - nothing to prune");
        }

        result
    }

    /// Start the cleanup service as a background task
    ///
    /// This spawns a tokio task that runs cleanup at regular intervals
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Token cleanup service is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "Token cleanup service started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;
                self.run_cleanup();
            }
        });
    }
}

/// Result of a cleanup operation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupResult {
    /// Number of revocation entries whose token had expired
    pub revoked_entries_pruned: usize,
    /// Number of refresh tokens past their expiry
    pub expired_refresh_tokens_pruned: usize,
}

impl CleanupResult {
    /// Get total number of items cleaned up
    pub fn total_cleaned(&self) -> usize {
        self.revoked_entries_pruned + self.expired_refresh_tokens_pruned
    }
}
