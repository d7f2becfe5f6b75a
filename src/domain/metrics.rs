use crate::domain::{MarketingMedium, SaleEvent};
use std::sync::Arc;
use std::time::Instant;

/// Abstraction for application metrics (sale counters, HTTP timings).
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in Prometheus text format.
    fn render(&self) -> String;

    /// Record a completed sale against the product, location and age-bracket counters.
    fn record_sale(&self, sale: &SaleEvent);

    /// Record HTTP request duration and labels.
    fn record_http_request(
        &self,
        start: Instant,
        route: &str,
        method: &str,
        status: u16,
        medium: MarketingMedium,
    );
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
