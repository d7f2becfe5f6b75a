mod counters;
mod prometheus_metrics;
mod recorder;

pub use prometheus_metrics::PrometheusMetrics;
use std::sync::Arc;

// Re-export utilities for internal use within this module
pub(crate) use counters::{
    describe_all, increment_age_bracket, increment_product_sold, increment_sales_by_location,
    track_http_request,
};
pub(crate) use recorder::build_recorder;

/// Creates a new Prometheus metrics implementation.
///
/// This implementation collects metrics in Prometheus format and exposes
/// them through the `/metrics` handler for scraping.
///
/// Returns a fully initialized metrics instance ready for use.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    tracing::info!("Initializing Prometheus metrics");
    let recorder = build_recorder()?;

    Ok(Arc::new(PrometheusMetrics::new(recorder)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_returns_valid_metrics() {
        let result = create();
        assert!(result.is_ok());
    }

    #[test]
    fn test_create_twice_does_not_conflict() {
        assert!(create().is_ok());
        assert!(create().is_ok());
    }
}
