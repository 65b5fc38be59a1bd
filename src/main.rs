//! Application entry point
use asteroid_impact::clients::NeoWsClient;
use asteroid_impact::config::AppConfig;
use asteroid_impact::handlers::AppState;
use asteroid_impact::routes::build_router;
use asteroid_impact::services::NeoService;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!(
        nasa_api_url = %config.nasa_api_url,
        origins = ?config.cors_origins,
        "Configuration loaded successfully"
    );

    // Initialize clients and services
    let neo_client = NeoWsClient::new(
        config.nasa_api_url.clone(),
        config.nasa_api_key.clone(),
        Duration::from_secs(config.http_timeout_seconds),
    )?;
    let state = AppState {
        neo_service: Arc::new(NeoService::new(neo_client)),
    };

    let app = build_router(state, &config.cors_origins);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("asteroid_impact service listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
