//! Dashboard metrics endpoint.

use axum::Json;
use serde_json::json;

/// Handles `GET /api/dashboard/metrics` -- fixed platform figures consumed
/// by the demo dashboard.
pub async fn dashboard_metrics_handler() -> Json<serde_json::Value> {
    Json(json!({
        "coherence": 0.9876,
        "fidelity": 0.9543,
        "uptime": 99.97,
        "jobs_completed": 15_847,
        "active_users": 342,
        "cost_savings": 0.34,
        "backends_online": 4,
        "avg_queue_time": 2.3,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn metrics_document_has_all_figures() {
        let response = dashboard_metrics_handler().await;
        let json = response.0;

        assert_eq!(json["coherence"], 0.9876);
        assert_eq!(json["jobs_completed"], 15_847);
        assert_eq!(json["backends_online"], 4);
        assert!(json["timestamp"].is_string());
    }
}
