//! User repository trait defining the credential store interface.
//!
//! The token core never creates identities; it receives them from an
//! implementation of this trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    ///
    /// The uniqueness check and the insert must be a single step: of several
    /// concurrent creates with the same email exactly one succeeds.
    ///
    /// # Arguments
    /// * `user` - The User entity to persist, email already normalised
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Conflict)` - Email already registered
    ///
    /// # Example
    /// ```no_run
    /// # use ag_core::repositories::UserRepository;
    /// # use ag_core::domain::entities::user::User;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let user = User::new("a@x.com".to_string(), "$2b$12$digest".to_string());
    /// let created = repo.create(user).await?;
    /// println!("Created user with ID: {}", created.id);
    /// # Ok(())
    /// # }
    /// ```
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by normalised email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with that email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;
}
