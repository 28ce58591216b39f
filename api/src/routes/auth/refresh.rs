use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use validator::Validate;

use ag_core::errors::DomainError;
use ag_core::repositories::{TokenStore, UserRepository};
use ag_core::services::auth::PasswordHasher;
use ag_shared::errors::{error_codes, error_messages};

use crate::dto::auth::{RefreshTokenRequest, TokenPairResponse};
use crate::handlers::error::{handle_domain_error, ApiError};

use super::AppState;

/// Handler for POST /api/auth/refresh
///
/// Exchanges a refresh token for a new pair. The presented token is
/// consumed whether or not the exchange succeeds.
///
/// # Request Body
///
/// ```json
/// { "refresh_token": "string" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Unreadable body
/// - 401 Unauthorized: Unknown, used or expired refresh token, or its owner no longer exists
pub async fn refresh<U, H, S>(
    state: web::Data<AppState<U, H, S>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    S: TokenStore + 'static,
{
    if let Err(errors) = request.validate() {
        return ApiError::from(errors).error_response();
    }

    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        // On this route a vanished account is an authentication failure
        Err(DomainError::NotFound { .. }) => ApiError::new(
            StatusCode::UNAUTHORIZED,
            error_codes::USER_NOT_FOUND,
            error_messages::USER_NOT_FOUND,
        )
        .error_response(),
        Err(error) => handle_domain_error(error),
    }
}
