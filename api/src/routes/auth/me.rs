use actix_web::{web, HttpResponse};

use ag_core::repositories::{TokenStore, UserRepository};
use ag_core::services::auth::PasswordHasher;

use crate::dto::auth::UserResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::Authenticated;

use super::AppState;

/// Handler for GET /api/auth/me
///
/// ## Errors
/// - 401 Unauthorized: via the middleware
/// - 404 Not Found: Account deleted after the token was issued
pub async fn me<U, H, S>(
    state: web::Data<AppState<U, H, S>>,
    auth: Authenticated,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    S: TokenStore + 'static,
{
    match state.auth_service.current_user(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
