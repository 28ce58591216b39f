use actix_web::{web, HttpResponse};

use ag_core::repositories::{TokenStore, UserRepository};
use ag_core::services::auth::PasswordHasher;
use ag_shared::errors::MessageResponse;

use crate::middleware::auth::Authenticated;

use super::AppState;

/// Handler for POST /api/auth/revoke
///
/// Revokes the access token the request was authenticated with. Requires
/// authentication via Bearer token in Authorization header; the refresh
/// token issued alongside it stays valid.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "Token revoked successfully" }
/// ```
pub async fn revoke<U, H, S>(
    state: web::Data<AppState<U, H, S>>,
    auth: Authenticated,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    S: TokenStore + 'static,
{
    state.auth_service.revoke(&auth);
    HttpResponse::Ok().json(MessageResponse::new("Token revoked successfully"))
}
