//! Error type definitions for authentication and input validation
//!
//! Display strings are for logs. The stable client-facing code and message of
//! each variant come from `error_code` / `client_message`, so wording changes
//! in logs never leak into the API contract.

use ag_shared::errors::{error_codes, error_messages, ErrorResponse};
use thiserror::Error;

/// Authentication and token errors; every variant means the client must re-authenticate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authorization token required")]
    TokenRequired,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,
}

impl AuthError {
    /// Stable error code exposed to clients
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::TokenRequired => error_codes::TOKEN_REQUIRED,
            AuthError::TokenRevoked => error_codes::TOKEN_REVOKED,
            AuthError::TokenExpired => error_codes::TOKEN_EXPIRED,
            AuthError::InvalidToken => error_codes::INVALID_TOKEN,
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::InvalidRefreshToken => error_codes::INVALID_REFRESH_TOKEN,
        }
    }

    /// Stable message exposed to clients
    pub fn client_message(&self) -> &'static str {
        match self {
            AuthError::TokenRequired => error_messages::TOKEN_REQUIRED,
            AuthError::TokenRevoked => error_messages::TOKEN_REVOKED,
            AuthError::TokenExpired => error_messages::TOKEN_EXPIRED,
            AuthError::InvalidToken => error_messages::INVALID_TOKEN,
            AuthError::InvalidCredentials => error_messages::INVALID_CREDENTIALS,
            AuthError::InvalidRefreshToken => error_messages::INVALID_REFRESH_TOKEN,
        }
    }
}

/// Input validation errors; the client fixes its request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid length: {field} (max: {max})")]
    InvalidLength { field: String, max: usize },
}

impl ValidationError {
    /// Stable message exposed to clients
    pub fn client_message(&self) -> String {
        match self {
            ValidationError::RequiredField { .. } => error_messages::REQUIRED_FIELDS.to_string(),
            ValidationError::InvalidEmail => error_messages::INVALID_EMAIL.to_string(),
            ValidationError::InvalidLength { field, max } => {
                format!("Field '{}' must be at most {} bytes", field, max)
            }
        }
    }
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        ErrorResponse::new(err.error_code(), err.client_message())
    }
}

impl From<&ValidationError> for ErrorResponse {
    fn from(err: &ValidationError) -> Self {
        ErrorResponse::new(error_codes::VALIDATION_ERROR, err.client_message())
    }
}
