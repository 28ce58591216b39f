use actix_web::{web, HttpResponse, ResponseError};
use validator::Validate;

use ag_core::repositories::{TokenStore, UserRepository};
use ag_core::services::auth::PasswordHasher;

use crate::dto::auth::{SignUpRequest, UserResponse};
use crate::handlers::error::{handle_domain_error, ApiError};

use super::AppState;

/// Handler for POST /api/auth/signup
///
/// # Request Body
///
/// ```json
/// { "email": "a@x.com", "password": "p1" }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "id": "...", "email": "a@x.com", "created_at": "..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing fields, malformed email or password too long
/// - 409 Conflict: Email already registered
pub async fn signup<U, H, S>(
    state: web::Data<AppState<U, H, S>>,
    request: web::Json<SignUpRequest>,
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
        .sign_up(&request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
