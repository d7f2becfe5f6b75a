use anyhow::Result;
use contoso_sales_metrics::{build_router, create_metrics, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be populated.
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber to log to stdout
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    info!(?config, "Loaded configuration");

    let metrics = create_metrics(&config.metrics)?;
    let app = build_router(metrics);

    info!("Starting at endpoint:{}", config.server.bind_addr);
    info!(
        "Starting Contoso sales metrics server v{}...",
        env!("CARGO_PKG_VERSION")
    );

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves when Ctrl-C is received.
async fn shutdown_signal() {
    // ---
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
