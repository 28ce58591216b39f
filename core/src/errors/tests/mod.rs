//! Unit tests for domain error types

use ag_shared::ErrorResponse;

use crate::errors::{AuthError, DomainError, ValidationError};

#[test]
fn test_auth_error_codes_are_distinct() {
    let all = [
        AuthError::TokenRequired,
        AuthError::TokenRevoked,
        AuthError::TokenExpired,
        AuthError::InvalidToken,
        AuthError::InvalidCredentials,
        AuthError::InvalidRefreshToken,
    ];

    let mut codes: Vec<&str> = all.iter().map(|e| e.error_code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), all.len());
}

#[test]
fn test_auth_error_conversion() {
    let response: ErrorResponse = AuthError::TokenExpired.into();
    assert_eq!(response.error, "TOKEN_EXPIRED");
    assert_eq!(response.message, "Token has expired");
}

#[test]
fn test_validation_error_message_hides_field_detail() {
    let error = ValidationError::RequiredField {
        field: "password".to_string(),
    };
    assert!(error.to_string().contains("password"));

    let response = ErrorResponse::from(&error);
    assert_eq!(response.error, "VALIDATION_ERROR");
    assert_eq!(response.message, "Required fields missing");
}

#[test]
fn test_domain_error_bridges() {
    let err: DomainError = AuthError::InvalidToken.into();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidToken)));

    let err: DomainError = ValidationError::InvalidEmail.into();
    assert!(matches!(err, DomainError::Validation(ValidationError::InvalidEmail)));

    let err = DomainError::internal("signing key missing");
    assert_eq!(err.to_string(), "Internal error: signing key missing");
}
