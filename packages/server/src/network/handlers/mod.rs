//! HTTP handler definitions for the `QSim` server.
//!
//! This module defines `AppState` (the shared state carried through axum
//! extractors) and re-exports all handler functions for convenient access
//! when building the router.

pub mod execute;
pub mod health;
pub mod ibm;
pub mod metrics;

pub use execute::execute_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use ibm::{
    backends_handler, cost_estimate_handler, jobs_list_handler, jobs_submit_handler,
    optimize_handler,
};
pub use metrics::dashboard_metrics_handler;

use std::sync::Arc;
use std::time::Instant;

use super::{NetworkConfig, ShutdownController};

/// Shared application state passed to all axum handlers via `State` extraction.
///
/// Holds `Arc` references to shared resources so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Graceful shutdown controller with health state.
    pub shutdown: Arc<ShutdownController>,
    /// Network configuration (bind address, CORS, timeout).
    pub config: Arc<NetworkConfig>,
    /// Server process start time, used for uptime calculation.
    pub start_time: Instant,
}

#[cfg(test)]
impl AppState {
    /// Fresh state for handler-level tests.
    pub(crate) fn for_tests() -> Self {
        Self {
            shutdown: Arc::new(ShutdownController::new()),
            config: Arc::new(NetworkConfig::default()),
            start_time: Instant::now(),
        }
    }
}
