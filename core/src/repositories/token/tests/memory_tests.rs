//! Unit tests for the in-memory token store

use std::sync::Arc;
use std::thread;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::repositories::token::{InMemoryTokenStore, TokenStore};

#[test]
fn test_record_and_resolve_refresh_token() {
    let store = InMemoryTokenStore::new();
    let user_id = Uuid::new_v4();

    store.record_refresh("refresh-a", user_id, None);

    assert_eq!(store.resolve_refresh("refresh-a"), Some(user_id));
    assert_eq!(store.resolve_refresh("refresh-b"), None);
    assert_eq!(store.refresh_count(), 1);
}

#[test]
fn test_record_overwrites_existing_mapping() {
    let store = InMemoryTokenStore::new();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    store.record_refresh("refresh-a", first, None);
    store.record_refresh("refresh-a", second, None);

    assert_eq!(store.resolve_refresh("refresh-a"), Some(second));
    assert_eq!(store.refresh_count(), 1);
}

#[test]
fn test_delete_refresh_is_idempotent() {
    let store = InMemoryTokenStore::new();
    store.record_refresh("refresh-a", Uuid::new_v4(), None);

    store.delete_refresh("refresh-a");
    store.delete_refresh("refresh-a");
    store.delete_refresh("never-recorded");

    assert_eq!(store.resolve_refresh("refresh-a"), None);
    assert_eq!(store.refresh_count(), 0);
}

#[test]
fn test_take_refresh_is_single_use() {
    let store = InMemoryTokenStore::new();
    let user_id = Uuid::new_v4();
    store.record_refresh("refresh-a", user_id, None);

    assert_eq!(store.take_refresh("refresh-a"), Some(user_id));
    assert_eq!(store.take_refresh("refresh-a"), None);
    assert_eq!(store.resolve_refresh("refresh-a"), None);
}

#[test]
fn test_expired_refresh_token_does_not_resolve() {
    let store = InMemoryTokenStore::new();
    let user_id = Uuid::new_v4();
    store.record_refresh("stale", user_id, Some(Utc::now() - Duration::seconds(1)));

    assert_eq!(store.resolve_refresh("stale"), None);
    assert_eq!(store.take_refresh("stale"), None);
    // take removes the stale record as well
    assert_eq!(store.refresh_count(), 0);
}

#[test]
fn test_concurrent_take_has_exactly_one_winner() {
    let store = Arc::new(InMemoryTokenStore::new());
    let user_id = Uuid::new_v4();
    store.record_refresh("contested", user_id, None);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.take_refresh("contested"))
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(Option::is_some)
        .count();

    assert_eq!(winners, 1);
}

#[test]
fn test_revoke_is_idempotent_and_monotonic() {
    let store = InMemoryTokenStore::new();
    let expires_at = Utc::now() + Duration::minutes(15);

    assert!(!store.is_revoked("access-a"));

    store.revoke("access-a", expires_at);
    store.revoke("access-a", expires_at);

    assert!(store.is_revoked("access-a"));
    assert!(!store.is_revoked("access-b"));
    assert_eq!(store.revoked_count(), 1);
}

#[test]
fn test_revoke_keeps_later_expiry() {
    let store = InMemoryTokenStore::new();
    let now = Utc::now();

    store.revoke("access-a", now + Duration::minutes(10));
    store.revoke("access-a", now - Duration::minutes(10));

    // The earlier expiry must not make the entry prunable
    assert_eq!(store.prune_revoked(now), 0);
    assert!(store.is_revoked("access-a"));
}

#[test]
fn test_prune_revoked_removes_only_expired_entries() {
    let store = InMemoryTokenStore::new();
    let now = Utc::now();

    store.revoke("expired", now - Duration::seconds(1));
    store.revoke("boundary", now);
    store.revoke("live", now + Duration::minutes(5));

    assert_eq!(store.prune_revoked(now), 2);
    assert!(!store.is_revoked("expired"));
    assert!(!store.is_revoked("boundary"));
    assert!(store.is_revoked("live"));
}

#[test]
fn test_prune_expired_refresh_keeps_open_ended_tokens() {
    let store = InMemoryTokenStore::new();
    let now = Utc::now();
    let user_id = Uuid::new_v4();

    store.record_refresh("expired", user_id, Some(now - Duration::seconds(1)));
    store.record_refresh("live", user_id, Some(now + Duration::days(1)));
    store.record_refresh("forever", user_id, None);

    assert_eq!(store.prune_expired_refresh(now), 1);
    assert_eq!(store.refresh_count(), 2);
    assert_eq!(store.resolve_refresh("forever"), Some(user_id));
}

#[test]
fn test_collections_are_independent() {
    let store = InMemoryTokenStore::new();
    store.record_refresh("same-string", Uuid::new_v4(), None);

    assert!(!store.is_revoked("same-string"));

    store.revoke("same-string", Utc::now() + Duration::minutes(1));
    assert!(store.resolve_refresh("same-string").is_some());
}
