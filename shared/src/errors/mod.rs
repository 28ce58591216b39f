//! Shared error response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code for client identification
    pub error: String,

    /// Human-readable message; never carries internal detail
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Error codes used across the application
pub mod error_codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const TOKEN_REQUIRED: &str = "TOKEN_REQUIRED";
    pub const TOKEN_REVOKED: &str = "TOKEN_REVOKED";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const INVALID_TOKEN: &str = "INVALID_TOKEN";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const INVALID_REFRESH_TOKEN: &str = "INVALID_REFRESH_TOKEN";
    pub const EMAIL_EXISTS: &str = "EMAIL_EXISTS";
    pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const METHOD_NOT_ALLOWED: &str = "METHOD_NOT_ALLOWED";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Message strings paired with the codes above
pub mod error_messages {
    pub const INVALID_REQUEST: &str = "Invalid request payload";
    pub const REQUIRED_FIELDS: &str = "Required fields missing";
    pub const INVALID_EMAIL: &str = "Invalid email address";
    pub const TOKEN_REQUIRED: &str = "Authorization token required";
    pub const TOKEN_REVOKED: &str = "Token has been revoked";
    pub const TOKEN_EXPIRED: &str = "Token has expired";
    pub const INVALID_TOKEN: &str = "Invalid token";
    pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
    pub const INVALID_REFRESH_TOKEN: &str = "Invalid refresh token";
    pub const EMAIL_EXISTS: &str = "Email already registered";
    pub const USER_NOT_FOUND: &str = "User not found";
    pub const NOT_FOUND: &str = "The requested resource was not found";
    pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
    pub const INTERNAL_ERROR: &str = "Internal server error";
}

/// Plain `{ "message": ... }` body for successful operations without data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
