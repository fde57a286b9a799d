use std::sync::Arc;
use std::time::Duration;

use log::info;

use blog_api::app;
use blog_api::lifecycle::ServerLifecycle;
use blog_infra::HttpUserLookup;
use blog_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting blog auth service");

    // Load and validate configuration (reads .env if present)
    let config = AppConfig::from_env();
    config.validate()?;

    // External collaborator: the user service verifies credential pairs
    let user_service_url = std::env::var("USER_SERVICE_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8081".to_string());
    let lookup = Arc::new(HttpUserLookup::new(user_service_url));

    // Bind failure is fatal before any serving begins
    let (server, addrs) = app::build_server(lookup, &config)?;
    info!("Listening on {addrs:?}");

    let lifecycle = ServerLifecycle::new(
        server,
        Duration::from_secs(config.server.shutdown_timeout),
    );
    lifecycle.run().await?;

    info!("Graceful shutdown complete");
    Ok(())
}
