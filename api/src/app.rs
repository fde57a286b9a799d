//! Application factory and server construction
//!
//! Wires the token manager, auth service, and user-lookup collaborator
//! together and binds the HTTP server. The bound server is handed to the
//! lifecycle, which owns serving and shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::{dev, middleware::Logger, web, App, HttpResponse, HttpServer};

use blog_core::lookup::UserLookup;
use blog_core::services::auth::AuthService;
use blog_core::services::token::{TokenManager, TokenManagerConfig};
use blog_shared::config::AppConfig;
use blog_shared::types::response::{error_codes, ErrorResponse};

use crate::lifecycle::LifecycleError;
use crate::routes::auth::{login::login, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<L>(
    app_state: web::Data<AppState<L>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    L: UserLookup + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(web::scope("/auth").route("/login", web::post().to(login::<L>))),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Bind the HTTP server for the given configuration
///
/// Constructs the token manager and auth service once and shares them
/// across workers. Binding happens here so a bind failure is reported
/// before any serving begins.
///
/// # Returns
///
/// The bound (not yet running) server and the addresses it listens on.
pub fn build_server<L>(
    lookup: Arc<L>,
    config: &AppConfig,
) -> Result<(dev::Server, Vec<SocketAddr>), LifecycleError>
where
    L: UserLookup + 'static,
{
    let token_manager = Arc::new(TokenManager::new(TokenManagerConfig::from(&config.jwt)));
    let auth_service = Arc::new(AuthService::new(lookup, token_manager));
    let app_state = web::Data::new(AppState { auth_service });

    let bind_address = config.server.bind_address();

    let mut server = HttpServer::new(move || create_app(app_state.clone()))
        // The lifecycle owns signal handling and the drain deadline.
        .disable_signals()
        .shutdown_timeout(config.server.shutdown_timeout);

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let server = server.bind(&bind_address).map_err(|source| LifecycleError::Bind {
        addr: bind_address.clone(),
        source,
    })?;
    let addrs = server.addrs();

    Ok((server.run(), addrs))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "blog-auth",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
