use actix_web::{web, HttpResponse, ResponseError};
use validator::Validate;

use ag_core::repositories::{TokenStore, UserRepository};
use ag_core::services::auth::PasswordHasher;

use crate::dto::auth::{SignInRequest, TokenPairResponse};
use crate::handlers::error::{handle_domain_error, ApiError};

use super::AppState;

/// Handler for POST /api/auth/signin
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "access_token": "eyJ...", "refresh_token": "..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing fields
/// - 401 Unauthorized: Unknown email or wrong password
pub async fn signin<U, H, S>(
    state: web::Data<AppState<U, H, S>>,
    request: web::Json<SignInRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    S: TokenStore + 'static,
{
    if let Err(errors) = request.validate() {
        return ApiError::from(errors).error_response();
    }

    match state
        .auth_service
        .sign_in(&request.email, &request.password)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
