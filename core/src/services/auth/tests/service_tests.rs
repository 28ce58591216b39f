//! Unit tests for authentication service

use std::sync::Arc;

use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{TokenStore, UserRepository};
use crate::services::gate::AuthGate;

use super::mocks::*;

#[tokio::test]
async fn test_sign_up_creates_user_with_normalised_email() {
    let ctx = create_test_context();

    let user = ctx.service.sign_up("  A@X.Com ", "p1").await.unwrap();

    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.password_hash, "hashed:p1");
    assert!(ctx.users.find_by_email("a@x.com").await.unwrap().is_some());
}

#[tokio::test]
async fn test_sign_up_duplicate_email_conflicts() {
    let ctx = create_test_context();
    ctx.service.sign_up("a@x.com", "p1").await.unwrap();

    let result = ctx.service.sign_up("A@x.com", "p2").await;

    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_sign_up_validation() {
    let ctx = create_test_context();

    let missing_email = ctx.service.sign_up("", "p1").await;
    assert!(matches!(
        missing_email,
        Err(DomainError::Validation(ValidationError::RequiredField { ref field })) if field == "email"
    ));

    let missing_password = ctx.service.sign_up("a@x.com", "").await;
    assert!(matches!(
        missing_password,
        Err(DomainError::Validation(ValidationError::RequiredField { ref field })) if field == "password"
    ));

    let bad_email = ctx.service.sign_up("not-an-email", "p1").await;
    assert!(matches!(
        bad_email,
        Err(DomainError::Validation(ValidationError::InvalidEmail))
    ));

    let long_password = "x".repeat(73);
    let too_long = ctx.service.sign_up("a@x.com", &long_password).await;
    assert!(matches!(
        too_long,
        Err(DomainError::Validation(ValidationError::InvalidLength { max: 72, .. }))
    ));

    assert!(ctx.service.sign_up("a@x.com", &"x".repeat(72)).await.is_ok());
}

#[tokio::test]
async fn test_sign_in_issues_valid_pair() {
    let ctx = create_test_context();
    let user = ctx.service.sign_up("a@x.com", "p1").await.unwrap();

    let pair = ctx.service.sign_in("A@X.COM", "p1").await.unwrap();

    let claims = ctx.token_service.validate(&pair.access_token).unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(ctx.store.resolve_refresh(&pair.refresh_token), Some(user.id));
}

#[tokio::test]
async fn test_sign_in_failures_are_indistinguishable() {
    let ctx = create_test_context();
    ctx.service.sign_up("a@x.com", "p1").await.unwrap();

    let wrong_password = ctx.service.sign_in("a@x.com", "nope").await;
    let unknown_email = ctx.service.sign_in("b@x.com", "p1").await;

    assert!(matches!(
        wrong_password,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert_eq!(ctx.store.refresh_count(), 0);
}

#[tokio::test]
async fn test_unknown_email_still_verifies_a_password() {
    let ctx = create_test_context();
    ctx.service.sign_up("a@x.com", "p1").await.unwrap();

    ctx.service.sign_in("a@x.com", "nope").await.unwrap_err();
    assert_eq!(ctx.hasher.verify_calls(), 1);

    ctx.service.sign_in("b@x.com", "p1").await.unwrap_err();
    assert_eq!(ctx.hasher.verify_calls(), 2);
}

#[tokio::test]
async fn test_refresh_rotates_and_is_single_use() {
    let ctx = create_test_context();
    ctx.service.sign_up("a@x.com", "p1").await.unwrap();
    let first = ctx.service.sign_in("a@x.com", "p1").await.unwrap();

    let second = ctx.service.refresh(&first.refresh_token).await.unwrap();

    assert_ne!(first.refresh_token, second.refresh_token);
    assert!(ctx.token_service.validate(&second.access_token).is_ok());
    assert_eq!(ctx.store.resolve_refresh(&first.refresh_token), None);

    let replay = ctx.service.refresh(&first.refresh_token).await;
    assert!(matches!(
        replay,
        Err(DomainError::Auth(AuthError::InvalidRefreshToken))
    ));

    // The rotated token still works exactly once
    assert!(ctx.service.refresh(&second.refresh_token).await.is_ok());
}

#[tokio::test]
async fn test_refresh_with_unknown_token() {
    let ctx = create_test_context();

    for token in ["", "never-issued"] {
        let result = ctx.service.refresh(token).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InvalidRefreshToken))
        ));
    }
}

#[tokio::test]
async fn test_refresh_for_deleted_user_is_not_found() {
    let ctx = create_test_context();
    let user = ctx.service.sign_up("a@x.com", "p1").await.unwrap();
    let pair = ctx.service.sign_in("a@x.com", "p1").await.unwrap();

    ctx.users.remove(user.id).await;

    let result = ctx.service.refresh(&pair.refresh_token).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));

    // The token was consumed even though the exchange failed
    assert_eq!(ctx.store.refresh_count(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_refresh_has_one_winner() {
    let ctx = Arc::new(create_test_context());
    ctx.service.sign_up("a@x.com", "p1").await.unwrap();
    let pair = ctx.service.sign_in("a@x.com", "p1").await.unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ctx = Arc::clone(&ctx);
            let token = pair.refresh_token.clone();
            tokio::spawn(async move { ctx.service.refresh(&token).await })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
}

#[tokio::test]
async fn test_revoke_blocks_token_at_the_gate() {
    let ctx = create_test_context();
    ctx.service.sign_up("a@x.com", "p1").await.unwrap();
    let pair = ctx.service.sign_in("a@x.com", "p1").await.unwrap();
    let gate = AuthGate::new(Arc::clone(&ctx.token_service), Arc::clone(&ctx.store));
    let header = format!("Bearer {}", pair.access_token);

    let context = gate.check(Some(&header)).unwrap();
    ctx.service.revoke(&context);
    ctx.service.revoke(&context);

    assert!(ctx.store.is_revoked(&pair.access_token));
    assert_eq!(ctx.store.revoked_count(), 1);
    assert_eq!(gate.check(Some(&header)).unwrap_err(), AuthError::TokenRevoked);

    // Revoking the access token leaves the refresh token usable
    assert!(ctx.service.refresh(&pair.refresh_token).await.is_ok());
}

#[tokio::test]
async fn test_current_user() {
    let ctx = create_test_context();
    let user = ctx.service.sign_up("a@x.com", "p1").await.unwrap();

    let found = ctx.service.current_user(user.id).await.unwrap();
    assert_eq!(found.id, user.id);

    ctx.users.remove(user.id).await;
    assert!(matches!(
        ctx.service.current_user(user.id).await,
        Err(DomainError::NotFound { .. })
    ));
}
