//! Unit tests for the bcrypt password hasher

use ag_core::errors::DomainError;
use ag_core::services::auth::PasswordHasher;

use crate::services::auth::BcryptPasswordHasher;

// Minimum cost keeps the tests fast
const TEST_COST: u32 = 4;

#[test]
fn test_hash_and_verify() {
    let hasher = BcryptPasswordHasher::new(TEST_COST);
    let digest = hasher.hash("p1").unwrap();

    assert_ne!(digest, "p1");
    assert!(digest.starts_with("$2"));
    assert!(hasher.verify("p1", &digest).unwrap());
    assert!(!hasher.verify("p2", &digest).unwrap());
}

#[test]
fn test_hashes_are_salted() {
    let hasher = BcryptPasswordHasher::new(TEST_COST);

    let first = hasher.hash("p1").unwrap();
    let second = hasher.hash("p1").unwrap();

    assert_ne!(first, second);
    assert!(hasher.verify("p1", &first).unwrap());
    assert!(hasher.verify("p1", &second).unwrap());
}

#[test]
fn test_malformed_digest_is_an_error() {
    let hasher = BcryptPasswordHasher::new(TEST_COST);

    assert!(matches!(
        hasher.verify("p1", "not-a-bcrypt-digest"),
        Err(DomainError::Internal { .. })
    ));
}

#[test]
fn test_default_cost() {
    assert_eq!(BcryptPasswordHasher::default().cost(), 12);
}
