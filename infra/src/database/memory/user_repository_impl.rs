//! In-memory implementation of the UserRepository trait.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use ag_core::domain::entities::user::User;
use ag_core::errors::DomainError;
use ag_core::repositories::UserRepository;

#[derive(Default)]
struct Accounts {
    by_id: HashMap<Uuid, User>,
    /// normalised email -> user id
    by_email: HashMap<String, Uuid>,
}

/// In-memory implementation of UserRepository
///
/// Both indexes sit behind one lock, so the duplicate check and the insert
/// in `create` are a single step.
#[derive(Default)]
pub struct InMemoryUserRepository {
    accounts: RwLock<Accounts>,
}

impl InMemoryUserRepository {
    /// Create an empty credential store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.accounts.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut accounts = self.accounts.write();

        if accounts.by_email.contains_key(&user.email) {
            debug!("Rejected duplicate registration");
            return Err(DomainError::Conflict {
                resource: "email".to_string(),
            });
        }

        accounts.by_email.insert(user.email.clone(), user.id);
        accounts.by_id.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let accounts = self.accounts.read();
        Ok(accounts
            .by_email
            .get(email)
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.accounts.read().by_id.get(&id).cloned())
    }
}
