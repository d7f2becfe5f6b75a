// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Every setting is optional; the defaults describe a local development
//! server with Prometheus metrics enabled.

use anyhow::Result;
use std::str::FromStr;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable as a string.
///
/// Missing variables fall back to the provided default.
macro_rules! optional_env {
    // ---
    ($key:literal, $default:expr) => {
        std::env::var($key).unwrap_or_else(|_| $default.to_string())
    };
}

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used. A value that is present but unparseable
/// is logged so a typo does not pass silently.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        match std::env::var($key) {
            Ok(raw) => raw.parse::<$ty>().unwrap_or_else(|_| {
                tracing::warn!(key = $key, value = %raw, "Unrecognised value, using default");
                $default
            }),
            Err(_) => $default,
        }
    };
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: server::ServerConfig,
    pub metrics: exporter::MetricsConfig,
}

impl AppConfig {
    /// Loads application configuration from the environment.
    ///
    /// This function is intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            server: server::ServerConfig::from_env()?,
            metrics: exporter::MetricsConfig::from_env()?,
        })
    }
}

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---
    use super::*;

    /// Listener configuration.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Address the HTTP listener binds to. Defaults to `127.0.0.1:8080`.
        pub bind_addr: String,
    }

    impl ServerConfig {
        /// Builds a [`ServerConfig`] from environment variables.
        pub fn from_env() -> Result<Self> {
            // ---
            let bind_addr = optional_env!("CONTOSO_BIND_ADDR", "127.0.0.1:8080");

            Ok(Self { bind_addr })
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Metrics configuration
// ============================================================

mod exporter {
    // ---
    use super::*;

    /// Which [`crate::domain::Metrics`] backend to construct.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum MetricsBackend {
        /// Prometheus text exposition on `/metrics`.
        #[default]
        Prometheus,
        /// Discard everything; `/metrics` renders an empty body.
        Noop,
    }

    impl FromStr for MetricsBackend {
        type Err = anyhow::Error;

        fn from_str(s: &str) -> Result<Self> {
            // ---
            match s {
                "prom" => Ok(MetricsBackend::Prometheus),
                "noop" => Ok(MetricsBackend::Noop),
                other => Err(anyhow::anyhow!("Unknown metrics backend: {other}")),
            }
        }
    }

    /// Metrics-related configuration.
    #[derive(Debug, Clone)]
    pub struct MetricsConfig {
        /// Selected backend. Defaults to Prometheus.
        pub backend: MetricsBackend,
    }

    impl MetricsConfig {
        /// Builds a [`MetricsConfig`] from environment variables.
        ///
        /// Unrecognised values of `CONTOSO_METRICS_TYPE` fall back to Prometheus.
        pub fn from_env() -> Result<Self> {
            // ---
            let backend = optional_env_parse!(
                "CONTOSO_METRICS_TYPE",
                MetricsBackend,
                MetricsBackend::Prometheus
            );

            Ok(Self { backend })
        }
    }
}
pub use exporter::{MetricsBackend, MetricsConfig};

// ============================================================
// Tests
// ============================================================
