use actix_web::{middleware::Logger, HttpServer};
use dotenvy::dotenv;
use log::{error, info, warn};

use ag_api::{create_app, AppServices};
use ag_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logger; RUST_LOG takes precedence over LOG_LEVEL
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    info!("Starting AuthGate API Server ({})", config.environment);

    if config.auth.jwt.ephemeral_secret {
        warn!("JWT_SECRET not set; using a random secret, issued tokens will not survive a restart");
    }

    let services = match AppServices::new(&config.auth) {
        Ok(services) => services,
        Err(e) => {
            error!("Failed to initialise services: {}", e);
            std::process::exit(1);
        }
    };

    services.cleanup.clone().start_background_task();

    let bind_address = config.server.bind_address();
    let payload_limit = config.server.max_payload_size;
    let state = services.state.clone();
    let gate = services.gate.clone();

    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_app(state.clone(), gate.clone(), payload_limit).wrap(Logger::default())
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
