//! Database module - credential store implementations
//!
//! Accounts live in process memory behind a reader-writer lock.

pub mod memory;


// Re-export commonly used types
pub use memory::InMemoryUserRepository;
