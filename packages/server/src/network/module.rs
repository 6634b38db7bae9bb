//! Network module with deferred startup lifecycle.
//!
//! Implements the deferred startup pattern: `new()` creates resources,
//! `start()` binds the TCP listener, and `serve()` starts accepting
//! connections. This separation lets callers (and tests) learn the actual
//! bound port before traffic flows.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use super::config::NetworkConfig;
use super::handlers::{
    backends_handler, cost_estimate_handler, dashboard_metrics_handler, execute_handler,
    health_handler, jobs_list_handler, jobs_submit_handler, liveness_handler, optimize_handler,
    readiness_handler, AppState,
};
use super::middleware::apply_http_middleware;
use super::shutdown::ShutdownController;

/// Manages the full HTTP server lifecycle.
///
/// Follows the deferred startup pattern:
/// 1. `new()` -- allocates shared state (shutdown controller)
/// 2. `start()` -- binds the TCP listener to the configured address
/// 3. `serve()` -- begins accepting connections until shutdown is signalled
pub struct NetworkModule {
    config: NetworkConfig,
    listener: Option<TcpListener>,
    shutdown: Arc<ShutdownController>,
}

impl NetworkModule {
    /// Creates a new network module without binding any port.
    #[must_use]
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            config,
            listener: None,
            shutdown: Arc::new(ShutdownController::new()),
        }
    }

    /// Returns a shared reference to the shutdown controller.
    #[must_use]
    pub fn shutdown_controller(&self) -> Arc<ShutdownController> {
        Arc::clone(&self.shutdown)
    }

    /// Assembles the axum router with all routes and middleware.
    ///
    /// Routes:
    /// - `GET  /api/health` -- platform health document
    /// - `GET  /health/live` -- Kubernetes liveness probe
    /// - `GET  /health/ready` -- Kubernetes readiness probe
    /// - `POST /api/operations/execute` -- operation dispatch
    /// - `GET  /api/ibm/backends` -- backend table
    /// - `GET|POST /api/ibm/jobs` -- job list / job submission
    /// - `POST /api/ibm/cost-estimate` -- cost estimate
    /// - `POST /api/ibm/optimize` -- circuit optimization figures
    /// - `GET  /api/dashboard/metrics` -- platform metrics document
    #[must_use]
    pub fn build_router(&self) -> Router {
        let state = AppState {
            shutdown: Arc::clone(&self.shutdown),
            config: Arc::new(self.config.clone()),
            start_time: Instant::now(),
        };

        let router = Router::new()
            .route("/api/health", get(health_handler))
            .route("/health/live", get(liveness_handler))
            .route("/health/ready", get(readiness_handler))
            .route("/api/operations/execute", post(execute_handler))
            .route("/api/ibm/backends", get(backends_handler))
            .route(
                "/api/ibm/jobs",
                get(jobs_list_handler).post(jobs_submit_handler),
            )
            .route("/api/ibm/cost-estimate", post(cost_estimate_handler))
            .route("/api/ibm/optimize", post(optimize_handler))
            .route("/api/dashboard/metrics", get(dashboard_metrics_handler));

        apply_http_middleware(router, &self.config).with_state(state)
    }

    /// Binds the TCP listener to the configured host and port.
    ///
    /// Returns the actual bound port, which may differ from the configured
    /// port when port 0 is used (OS-assigned ephemeral port).
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound (e.g., port in use).
    pub async fn start(&mut self) -> anyhow::Result<u16> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();

        info!("TCP listener bound to {}:{}", self.config.host, port);

        self.listener = Some(listener);
        Ok(port)
    }

    /// Starts serving connections until the shutdown signal fires.
    ///
    /// Consumes `self` because the listener is moved into the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server encounters a fatal I/O error.
    ///
    /// # Panics
    ///
    /// Panics if `start()` was not called before `serve()`.
    pub async fn serve(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let listener = self
            .listener
            .as_ref()
            .expect("start() must be called before serve()");
        info!("Serving HTTP connections on {}", listener.local_addr()?);

        let router = self.build_router();
        let shutdown_ctrl = Arc::clone(&self.shutdown);
        let listener = self.listener.expect("listener checked above");

        // Transition to Ready so readiness probes pass.
        shutdown_ctrl.set_ready();

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        shutdown_ctrl.trigger_shutdown();
        info!("Server stopped");
        Ok(())
    }
}
