//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The only shared resource is the
//! metrics registry, which every request may update concurrently.
//!
//! The state is cheaply cloneable (an `Arc` internally) so it can be handed
//! to each request handler without copying the registry.

use crate::domain::MetricsPtr;

/// Shared application state passed to all Axum handlers.
///
/// Built once in `build_router()` at startup, attached to the router via
/// `.with_state(app_state)`, and cloned by Axum for each incoming request.
/// The metrics backend guarantees safe concurrent increments, so no locking
/// happens here.
#[derive(Clone)]
pub(crate) struct AppState {
    /// Metrics implementation for recording sales and HTTP timings.
    ///
    /// Either Prometheus-backed (production) or no-op (testing/development).
    metrics: MetricsPtr,
}

impl AppState {
    // ---

    pub fn new(metrics: MetricsPtr) -> Self {
        AppState { metrics }
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    // ---

    use super::*;
    use crate::infrastructure::{create_noop_metrics, create_prom_metrics};
    use std::sync::Arc;

    #[test]
    fn test_app_state_creation_and_clone() {
        // ---
        let metrics = create_noop_metrics().unwrap();
        let app_state = AppState::new(metrics);
        let cloned = app_state.clone();

        assert!(cloned.metrics().render().is_empty());
    }

    #[test]
    fn test_clones_share_one_registry() {
        // ---
        let app_state = AppState::new(create_prom_metrics().unwrap());
        let cloned = app_state.clone();

        assert!(Arc::ptr_eq(app_state.metrics(), cloned.metrics()));
    }
}
