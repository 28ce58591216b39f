//! Mapping from domain errors to HTTP responses
//!
//! Every failure leaves the server as an `ErrorResponse` body with a fixed
//! status and a stable message. Internal detail only reaches the log.

use actix_web::{
    error::{JsonPayloadError, ResponseError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use ag_core::errors::{AuthError, DomainError};
use ag_shared::errors::{error_codes, error_messages, ErrorResponse};
use thiserror::Error;
use validator::ValidationErrors;

/// HTTP-ready error: a status plus the body sent to the client
#[derive(Debug, Error)]
#[error("{}: {}", .status, .body.message)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(code, message),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(&self.body)
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            body: error.into(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation(ref validation) => Self {
                status: StatusCode::BAD_REQUEST,
                body: validation.into(),
            },
            DomainError::Auth(auth) => auth.into(),
            DomainError::Conflict { .. } => Self::new(
                StatusCode::CONFLICT,
                error_codes::EMAIL_EXISTS,
                error_messages::EMAIL_EXISTS,
            ),
            DomainError::NotFound { .. } => Self::new(
                StatusCode::NOT_FOUND,
                error_codes::USER_NOT_FOUND,
                error_messages::USER_NOT_FOUND,
            ),
            DomainError::Internal { message } => {
                log::error!("Internal error: {}", message);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_codes::INTERNAL_ERROR,
                    error_messages::INTERNAL_ERROR,
                )
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort_unstable();

        Self::new(
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            format!("Invalid field(s): {}", fields.join(", ")),
        )
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    if !matches!(error, DomainError::Internal { .. }) {
        log::debug!("Request failed: {}", error);
    }
    ApiError::from(error).error_response()
}

/// Handler for JSON bodies that cannot be read or parsed
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected request body: {}", error);

    let api_error = match error {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            ApiError::new(
                StatusCode::PAYLOAD_TOO_LARGE,
                error_codes::INVALID_REQUEST,
                "Request payload too large",
            )
        }
        _ => ApiError::bad_request(error_messages::INVALID_REQUEST),
    };

    api_error.into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    ApiError::new(
        StatusCode::NOT_FOUND,
        error_codes::NOT_FOUND,
        error_messages::NOT_FOUND,
    )
    .error_response()
}

/// Fallback for a known path hit with the wrong method
pub async fn method_not_allowed() -> HttpResponse {
    ApiError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        error_codes::METHOD_NOT_ALLOWED,
        error_messages::METHOD_NOT_ALLOWED,
    )
    .error_response()
}
