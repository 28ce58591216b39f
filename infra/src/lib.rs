//! # Infrastructure Layer
//!
//! Concrete implementations of the capability traits declared in `ag_core`:
//!
//! - **Database**: in-process credential store keyed by normalised email
//! - **Services**: bcrypt password hashing
//!
//! Nothing here survives a restart; both implementations are process-local.

/// Database module - credential store implementations
pub mod database;

/// Services module - Infrastructure service implementations
pub mod services;

pub use database::InMemoryUserRepository;
pub use services::auth::BcryptPasswordHasher;
