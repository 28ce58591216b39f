pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;

pub use r#trait::TokenStore;
pub use memory::InMemoryTokenStore;

#[cfg(test)]
mod tests;
