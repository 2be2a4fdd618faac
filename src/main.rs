use ringback::config::Config;
use ringback::interface::api::{build_router, init_metrics, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("Starting Ringback voice webhook");
    info!("Configuration loaded: {:?}", config);

    if config.webhook.signature_checks_enabled() {
        info!("Webhook signature validation enabled");
    } else {
        warn!("No webhook auth token configured, request signatures will not be checked");
    }

    // Initialize metrics exporter
    info!("Initializing Prometheus metrics exporter");
    let prometheus_handle = init_metrics()?;

    let webhook_path = config.webhook.path.clone();
    let app = build_router(AppState::new(config.webhook.clone()), prometheus_handle);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!(
        "Listening on {} (voice webhook at {})",
        listener.local_addr()?,
        webhook_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
