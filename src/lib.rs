// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use handlers::{complete_sale, health_check, metrics_handler, root_handler};

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;
mod middleware_layer;

pub use config::*;
pub use handlers::SALE_RECORDED;
pub use middleware_layer::{medium_from_uri, UNMATCHED_ROUTE};

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_noop_metrics, // ---
    create_prom_metrics,
};

/// Construct the metrics backend selected by configuration.
pub fn create_metrics(config: &MetricsConfig) -> Result<domain::MetricsPtr> {
    // ---
    match config.backend {
        MetricsBackend::Prometheus => create_prom_metrics(),
        MetricsBackend::Noop => create_noop_metrics(),
    }
}

/// Build the HTTP router with the metrics implementation determined by environment variables.
pub fn create_router() -> Result<Router> {
    // ---
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt::try_init().ok(); // Ignores if already initialized

    let metrics = create_metrics(&config.metrics)?;
    Ok(build_router(metrics))
}

/// Build the HTTP router around an explicitly constructed metrics registry.
pub fn build_router(metrics: domain::MetricsPtr) -> Router {
    // ---
    let app_state = AppState::new(metrics);

    Router::new()
        .route("/", get(root_handler))
        .route("/complete-sale", post(complete_sale))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            middleware_layer::track_request,
        ))
        .with_state(app_state)
}
