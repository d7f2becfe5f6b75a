//! Prometheus metrics implementation.
//!
//! This module provides a concrete implementation of the `Metrics` trait using
//! the Prometheus metrics format. It delegates to the macro helpers in
//! `counters.rs`, scoping each call to a recorder owned by this struct.
//!
//! Every `PrometheusMetrics` is a self-contained registry: nothing is
//! installed as the process-wide recorder, and rendering only reports the
//! series recorded through this instance.

use crate::domain::{AgeBracket, MarketingMedium, Metrics, SaleEvent};
use metrics_exporter_prometheus::{PrometheusHandle, PrometheusRecorder};
use std::time::Instant;

/// Prometheus-based metrics implementation.
pub struct PrometheusMetrics {
    recorder: PrometheusRecorder,
    handle: PrometheusHandle,
}

impl PrometheusMetrics {
    pub fn new(recorder: PrometheusRecorder) -> Self {
        // ---
        tracing::info!("Creating Prometheus metrics");
        let handle = recorder.handle();
        metrics::with_local_recorder(&recorder, super::describe_all);

        PrometheusMetrics { recorder, handle }
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        self.handle.render()
    }

    fn record_sale(&self, sale: &SaleEvent) {
        // ---
        // Counters only go up; a negative quantity is logged and dropped.
        let Ok(quantity) = u64::try_from(sale.quantity_sold) else {
            tracing::warn!(
                product = %sale.product_name,
                quantity = sale.quantity_sold,
                "Ignoring sale with negative quantity"
            );
            return;
        };
        let bracket = AgeBracket::from_age(sale.age);
        tracing::debug!(%bracket, "Recording sale counters");

        metrics::with_local_recorder(&self.recorder, || {
            super::increment_product_sold(&sale.product_name, quantity);
            super::increment_sales_by_location(&sale.location, quantity);
            super::increment_age_bracket(bracket, &sale.product_name, quantity);
        });
    }

    fn record_http_request(
        &self,
        start: Instant,
        route: &str,
        method: &str,
        status: u16,
        medium: MarketingMedium,
    ) {
        tracing::debug!("Recording HTTP request duration");
        metrics::with_local_recorder(&self.recorder, || {
            super::track_http_request(start, route, method, status, medium.as_str());
        });
    }
}
