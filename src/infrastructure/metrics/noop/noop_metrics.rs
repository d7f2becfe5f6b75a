use crate::domain::{MarketingMedium, Metrics, SaleEvent};
use std::time::Instant;

/// No-op metrics implementation for testing.
pub struct NoopMetrics;

impl NoopMetrics {
    pub fn new() -> Self {
        NoopMetrics
    }
}

impl Metrics for NoopMetrics {
    // ---
    fn render(&self) -> String {
        String::new()
    }
    fn record_sale(&self, _: &SaleEvent) {}
    fn record_http_request(&self, _: Instant, _: &str, _: &str, _: u16, _: MarketingMedium) {}
}
