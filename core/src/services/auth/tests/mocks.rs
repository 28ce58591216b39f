//! Mock implementations for testing authentication service

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::DomainError;
use crate::repositories::{InMemoryTokenStore, MockUserRepository};
use crate::services::auth::{AuthService, PasswordHasher};
use crate::services::token::{TokenService, TokenServiceConfig};

pub const SECRET: &str = "test-secret-that-is-at-least-32-bytes-long";

/// Reversible stand-in for bcrypt so tests stay fast
#[derive(Default)]
pub struct MockPasswordHasher {
    verify_calls: AtomicUsize,
}

impl MockPasswordHasher {
    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }
}

impl PasswordHasher for MockPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("hashed:{}", password))
    }

    fn verify(&self, password: &str, digest: &str) -> Result<bool, DomainError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        match digest.strip_prefix("hashed:") {
            Some(expected) => Ok(expected == password),
            None => Err(DomainError::internal("malformed digest")),
        }
    }
}

pub type TestAuthService = AuthService<MockUserRepository, MockPasswordHasher, InMemoryTokenStore>;

pub struct TestContext {
    pub service: TestAuthService,
    pub users: Arc<MockUserRepository>,
    pub hasher: Arc<MockPasswordHasher>,
    pub store: Arc<InMemoryTokenStore>,
    pub token_service: Arc<TokenService<InMemoryTokenStore>>,
}

pub fn create_test_context() -> TestContext {
    create_test_context_with(TokenServiceConfig::new(SECRET))
}

pub fn create_test_context_with(config: TokenServiceConfig) -> TestContext {
    let users = Arc::new(MockUserRepository::new());
    let hasher = Arc::new(MockPasswordHasher::default());
    let store = Arc::new(InMemoryTokenStore::new());
    let token_service = Arc::new(TokenService::new(Arc::clone(&store), config).unwrap());

    let service = AuthService::new(
        Arc::clone(&users),
        Arc::clone(&hasher),
        Arc::clone(&token_service),
    );

    TestContext {
        service,
        users,
        hasher,
        store,
        token_service,
    }
}
