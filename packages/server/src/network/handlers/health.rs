//! Health, liveness, and readiness endpoint handlers.
//!
//! `/api/health` serves the platform health document consumed by the demo
//! dashboard; the probe endpoints exist for orchestrators (Kubernetes,
//! load balancers).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use super::AppState;
use crate::network::HealthState;

/// Returns the platform health document as JSON.
///
/// Always returns 200 -- the `state` field in the response body indicates
/// whether the server is actually healthy. The `services` and `backends`
/// sections are fixed demo data.
pub async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let health = state.shutdown.health_state();
    let uptime_secs = state.start_time.elapsed().as_secs();

    Json(json!({
        "status": "healthy",
        "state": health.as_str(),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_secs": uptime_secs,
        "services": {
            "quantum_backend": "operational",
            "database": "operational",
            "cache": "operational",
            "telemetry": "operational",
        },
        "backends": [
            { "name": "ibm_brisbane", "status": "online", "queue_depth": 12 },
            { "name": "ibm_kyoto", "status": "online", "queue_depth": 8 },
            { "name": "ibm_osaka", "status": "online", "queue_depth": 15 },
            { "name": "simulator", "status": "online", "queue_depth": 0 },
        ],
    }))
}

/// Kubernetes liveness probe -- always returns 200 OK.
///
/// The liveness probe only checks whether the process is running and
/// responsive. A failed liveness probe triggers a pod restart, so it
/// intentionally ignores health state.
pub async fn liveness_handler() -> StatusCode {
    StatusCode::OK
}

/// Kubernetes readiness probe -- returns 200 when ready, 503 otherwise.
///
/// Returns 503 during startup (before `set_ready()` is called) and during
/// graceful shutdown (Draining state).
pub async fn readiness_handler(State(state): State<AppState>) -> StatusCode {
    if state.shutdown.health_state() == HealthState::Ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
