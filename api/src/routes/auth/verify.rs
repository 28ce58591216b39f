use actix_web::HttpResponse;

use crate::dto::auth::VerifyResponse;
use crate::middleware::auth::Authenticated;

/// Handler for POST /api/auth/verify
///
/// Validation happens in the middleware; reaching this handler means the
/// token is good.
pub async fn verify(auth: Authenticated) -> HttpResponse {
    let context = auth.into_inner();

    HttpResponse::Ok().json(VerifyResponse {
        message: "Token verified successfully".to_string(),
        user_id: context.user_id,
        email: context.email,
    })
}
