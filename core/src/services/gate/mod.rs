//! Request gating: bearer extraction, revocation check and token validation

mod context;
mod service;


pub use context::AuthContext;
pub use service::{extract_bearer, AccessGate, AuthGate};
