//! Application state and factory
//!
//! This module wires the concrete stores into the core services and
//! provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};

use ag_core::errors::DomainError;
use ag_core::repositories::{InMemoryTokenStore, TokenStore, UserRepository};
use ag_core::services::auth::{AuthService, PasswordHasher};
use ag_core::services::gate::{AccessGate, AuthGate};
use ag_core::services::token::{
    TokenCleanupConfig, TokenCleanupService, TokenService, TokenServiceConfig,
};
use ag_infra::{BcryptPasswordHasher, InMemoryUserRepository};
use ag_shared::config::AuthConfig;

use crate::handlers::error::{json_error_handler, method_not_allowed, not_found};
use crate::middleware::auth::JwtAuth;
use crate::routes::auth::{me::me, refresh::refresh, revoke::revoke, signin::signin, signup::signup, verify::verify, AppState};
use crate::routes::health::health_check;

/// Default request body limit (64 KB)
pub const DEFAULT_PAYLOAD_LIMIT: usize = 64 * 1024;

/// Application state over the in-process stores
pub type DefaultAppState = AppState<InMemoryUserRepository, BcryptPasswordHasher, InMemoryTokenStore>;

/// Everything the server needs, built once and shared by every worker
pub struct AppServices {
    pub state: web::Data<DefaultAppState>,
    pub gate: Arc<dyn AccessGate>,
    pub cleanup: Arc<TokenCleanupService<InMemoryTokenStore>>,
    pub token_store: Arc<InMemoryTokenStore>,
}

impl AppServices {
    /// Build the services from configuration
    ///
    /// # Errors
    ///
    /// `DomainError::Internal` when the signing secret is unusable
    pub fn new(auth: &AuthConfig) -> Result<Self, DomainError> {
        let token_store = Arc::new(InMemoryTokenStore::new());
        let user_repository = Arc::new(InMemoryUserRepository::new());
        let password_hasher = Arc::new(BcryptPasswordHasher::new(auth.bcrypt_cost));

        let token_service = Arc::new(TokenService::new(
            Arc::clone(&token_store),
            TokenServiceConfig::from(&auth.jwt),
        )?);

        let gate: Arc<dyn AccessGate> = Arc::new(AuthGate::new(
            Arc::clone(&token_service),
            Arc::clone(&token_store),
        ));

        let auth_service = Arc::new(AuthService::new(
            user_repository,
            password_hasher,
            token_service,
        ));

        let cleanup = Arc::new(TokenCleanupService::new(
            Arc::clone(&token_store),
            TokenCleanupConfig::with_interval(auth.cleanup_interval_seconds),
        ));

        Ok(Self {
            state: web::Data::new(AppState { auth_service }),
            gate,
            cleanup,
            token_store,
        })
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, H, S>(
    app_state: web::Data<AppState<U, H, S>>,
    gate: Arc<dyn AccessGate>,
    payload_limit: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    S: TokenStore + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(payload_limit)
        .error_handler(json_error_handler);

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config)

        // Health check endpoint
        .route("/health", web::get().to(health_check))

        // Auth routes
        .service(
            web::scope("/api/auth")
                .service(
                    web::resource("/signup")
                        .route(web::post().to(signup::<U, H, S>))
                        .default_service(web::to(method_not_allowed)),
                )
                .service(
                    web::resource("/signin")
                        .route(web::post().to(signin::<U, H, S>))
                        .default_service(web::to(method_not_allowed)),
                )
                .service(
                    web::resource("/refresh")
                        .route(web::post().to(refresh::<U, H, S>))
                        .default_service(web::to(method_not_allowed)),
                )
                .service(
                    web::resource("/revoke")
                        .route(web::post().to(revoke::<U, H, S>))
                        .default_service(web::to(method_not_allowed))
                        .wrap(JwtAuth::new(Arc::clone(&gate))),
                )
                .service(
                    web::resource("/verify")
                        .route(web::post().to(verify))
                        .default_service(web::to(method_not_allowed))
                        .wrap(JwtAuth::new(Arc::clone(&gate))),
                )
                .service(
                    web::resource("/me")
                        .route(web::get().to(me::<U, H, S>))
                        .default_service(web::to(method_not_allowed))
                        .wrap(JwtAuth::new(gate)),
                ),
        )

        // Default 404 handler
        .default_service(web::to(not_found))
}
