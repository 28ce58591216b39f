//! Authentication-related infrastructure services

pub mod password_hasher;

#[cfg(test)]
mod tests;

pub use password_hasher::BcryptPasswordHasher;
