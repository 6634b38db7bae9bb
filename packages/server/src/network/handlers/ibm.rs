//! IBM Quantum demo endpoints: backend listing, job listing/submission,
//! cost estimation, and circuit optimization.
//!
//! All of these are static tables or fixed formulas -- no state survives a
//! request. Request bodies deserialize into typed structs whose fields all
//! default, so an empty object is always a valid body.

use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Calibration and pricing figures for one backend.
#[derive(Debug, Clone, Serialize)]
pub struct BackendInfo {
    pub name: &'static str,
    pub qubits: u32,
    pub status: &'static str,
    pub queue: u32,
    pub t1: f64,
    pub t2: f64,
    pub readout_error: f64,
    pub gate_error: f64,
    pub cost_per_shot: f64,
}

/// Fixed backend table served by `GET /api/ibm/backends`.
const BACKENDS: [BackendInfo; 4] = [
    BackendInfo {
        name: "ibm_torino",
        qubits: 127,
        status: "online",
        queue: 12,
        t1: 185.3,
        t2: 142.7,
        readout_error: 0.012,
        gate_error: 0.0008,
        cost_per_shot: 0.00042,
    },
    BackendInfo {
        name: "ibm_kyoto",
        qubits: 127,
        status: "online",
        queue: 8,
        t1: 192.1,
        t2: 156.4,
        readout_error: 0.01,
        gate_error: 0.0007,
        cost_per_shot: 0.00045,
    },
    BackendInfo {
        name: "ibm_osaka",
        qubits: 127,
        status: "online",
        queue: 15,
        t1: 178.9,
        t2: 138.2,
        readout_error: 0.013,
        gate_error: 0.0009,
        cost_per_shot: 0.0004,
    },
    BackendInfo {
        name: "ibm_brisbane",
        qubits: 127,
        status: "maintenance",
        queue: 0,
        t1: 0.0,
        t2: 0.0,
        readout_error: 0.0,
        gate_error: 0.0,
        cost_per_shot: 0.0,
    },
];

/// Handles `GET /api/ibm/backends`.
pub async fn backends_handler() -> Json<serde_json::Value> {
    Json(json!({
        "backends": BACKENDS,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Handles `GET /api/ibm/jobs` -- fixed sample job list with timestamps
/// relative to the current instant.
pub async fn jobs_list_handler() -> Json<serde_json::Value> {
    let now = Utc::now();
    Json(json!({
        "jobs": [
            {
                "id": "job_001",
                "circuit_name": "Bell State",
                "backend": "ibm_torino",
                "status": "completed",
                "shots": 1024,
                "qubits": 2,
                "depth": 2,
                "cost": 0.43,
                "fidelity": 0.956,
                "created_at": (now - Duration::hours(1)).to_rfc3339(),
                "completed_at": (now - Duration::minutes(50)).to_rfc3339(),
            },
            {
                "id": "job_002",
                "circuit_name": "GHZ State",
                "backend": "ibm_kyoto",
                "status": "running",
                "shots": 2048,
                "qubits": 3,
                "depth": 3,
                "cost": 0.92,
                "fidelity": null,
                "created_at": (now - Duration::minutes(10)).to_rfc3339(),
                "completed_at": null,
            },
            {
                "id": "job_003",
                "circuit_name": "QFT 5-qubit",
                "backend": "ibm_osaka",
                "status": "queued",
                "shots": 4096,
                "qubits": 5,
                "depth": 45,
                "cost": 1.68,
                "fidelity": null,
                "created_at": (now - Duration::minutes(5)).to_rfc3339(),
                "completed_at": null,
            },
        ],
        "timestamp": now.to_rfc3339(),
    }))
}

/// Body of `POST /api/ibm/jobs`. Every field defaults, so `{}` is valid.
#[derive(Debug, Deserialize)]
pub struct JobSubmission {
    #[serde(default = "default_circuit_name")]
    pub circuit_name: String,
    #[serde(default = "default_backend")]
    pub backend: String,
    #[serde(default = "default_job_shots")]
    pub shots: u64,
    #[serde(default = "default_qubits")]
    pub qubits: u32,
    #[serde(default = "default_depth_small")]
    pub depth: u32,
}

fn default_circuit_name() -> String {
    "Unnamed Circuit".to_string()
}

fn default_backend() -> String {
    "ibm_torino".to_string()
}

fn default_job_shots() -> u64 {
    1024
}

fn default_qubits() -> u32 {
    2
}

fn default_depth_small() -> u32 {
    10
}

/// Handles `POST /api/ibm/jobs` -- synthetic job submission. The job is
/// never executed; the response just acknowledges it as queued.
#[allow(clippy::cast_precision_loss)]
pub async fn jobs_submit_handler(Json(body): Json<JobSubmission>) -> Json<serde_json::Value> {
    let now = Utc::now();
    let job = json!({
        "id": format!("job_{}", now.timestamp_millis()),
        "circuit_name": body.circuit_name,
        "backend": body.backend,
        "status": "queued",
        "shots": body.shots,
        "qubits": body.qubits,
        "depth": body.depth,
        "cost": body.shots as f64 * 0.00042,
        "fidelity": null,
        "created_at": now.to_rfc3339(),
        "completed_at": null,
    });
    Json(json!({ "job": job, "success": true }))
}

/// Body of `POST /api/ibm/cost-estimate`.
#[derive(Debug, Deserialize)]
pub struct CostEstimateRequest {
    #[serde(default = "default_job_shots")]
    pub shots: u64,
    #[serde(default = "default_backend")]
    pub backend: String,
    #[serde(default)]
    pub optimized: bool,
}

/// Per-shot price for a backend; unknown backends use the torino rate.
fn cost_per_shot(backend: &str) -> f64 {
    match backend {
        "ibm_kyoto" => 0.00045,
        "ibm_osaka" => 0.0004,
        "ibm_brisbane" => 0.00038,
        _ => 0.00042,
    }
}

/// Rounds to 4 decimal places, matching the quoted currency precision.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Handles `POST /api/ibm/cost-estimate` -- fixed-formula estimate with an
/// optional 15% optimization discount.
#[allow(clippy::cast_precision_loss)]
pub async fn cost_estimate_handler(
    Json(body): Json<CostEstimateRequest>,
) -> Json<serde_json::Value> {
    let base_cost = body.shots as f64 * cost_per_shot(&body.backend);
    let optimization_savings = if body.optimized { base_cost * 0.15 } else { 0.0 };
    let final_cost = base_cost - optimization_savings;

    Json(json!({
        "estimate": {
            "shots": body.shots,
            "backend": body.backend,
            "base_cost": round4(base_cost),
            "optimization_savings": round4(optimization_savings),
            "final_cost": round4(final_cost),
            "currency": "USD",
            "estimated_execution_time_seconds": body.shots.div_ceil(100),
        },
        "success": true,
    }))
}

/// Body of `POST /api/ibm/optimize`.
#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default = "default_depth_large")]
    pub depth: u32,
    #[serde(default = "default_optimization_level")]
    pub optimization_level: u8,
}

fn default_depth_large() -> u32 {
    100
}

fn default_optimization_level() -> u8 {
    3
}

/// Depth reduction factor per optimization level 0-3.
const REDUCTION_FACTORS: [f64; 4] = [1.0, 0.85, 0.7, 0.55];

/// Handles `POST /api/ibm/optimize` -- fixed-formula circuit optimization
/// figures. Levels above 3 are clamped to 3.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub async fn optimize_handler(Json(body): Json<OptimizeRequest>) -> Json<serde_json::Value> {
    let level = usize::from(body.optimization_level).min(REDUCTION_FACTORS.len() - 1);
    let original_depth = body.depth;
    let optimized_depth = (f64::from(original_depth) * REDUCTION_FACTORS[level]).floor() as u32;

    let reduction_percent = if original_depth == 0 {
        0.0
    } else {
        let raw = f64::from(original_depth - optimized_depth) / f64::from(original_depth) * 100.0;
        (raw * 10.0).round() / 10.0
    };

    let level_f = level as f64;
    Json(json!({
        "result": {
            "original_depth": original_depth,
            "optimized_depth": optimized_depth,
            "reduction_percent": reduction_percent,
            "optimization_level": level,
            "estimated_fidelity_improvement": 0.05 * level_f,
            "estimated_cost_reduction": 0.15 * level_f,
            "transpilation_time_ms": 150 + level * 50,
        },
        "success": true,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn backends_handler_serves_fixed_table() {
        let response = backends_handler().await;
        let backends = response.0["backends"].as_array().unwrap();
        assert_eq!(backends.len(), 4);
        assert_eq!(backends[0]["name"], "ibm_torino");
        assert_eq!(backends[3]["status"], "maintenance");
        assert_eq!(backends[1]["cost_per_shot"], 0.00045);
    }

    #[tokio::test]
    async fn jobs_list_serves_three_sample_jobs() {
        let response = jobs_list_handler().await;
        let jobs = response.0["jobs"].as_array().unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0]["status"], "completed");
        assert!(jobs[1]["fidelity"].is_null());
        assert!(jobs[2]["completed_at"].is_null());
    }

    #[tokio::test]
    async fn jobs_submit_applies_defaults() {
        let body: JobSubmission = serde_json::from_str("{}").unwrap();
        let response = jobs_submit_handler(Json(body)).await;
        let job = &response.0["job"];

        assert_eq!(job["circuit_name"], "Unnamed Circuit");
        assert_eq!(job["backend"], "ibm_torino");
        assert_eq!(job["shots"], 1024);
        assert_eq!(job["status"], "queued");
        assert!(job["id"].as_str().unwrap().starts_with("job_"));
        assert_eq!(response.0["success"], true);
    }

    #[tokio::test]
    async fn jobs_submit_prices_by_shot_count() {
        let body: JobSubmission =
            serde_json::from_value(serde_json::json!({ "shots": 2000 })).unwrap();
        let response = jobs_submit_handler(Json(body)).await;
        let cost = response.0["job"]["cost"].as_f64().unwrap();
        assert!((cost - 0.84).abs() < 1e-9);
    }

    #[tokio::test]
    async fn cost_estimate_uses_backend_rates() {
        let body: CostEstimateRequest = serde_json::from_value(serde_json::json!({
            "shots": 10_000,
            "backend": "ibm_brisbane",
        }))
        .unwrap();
        let response = cost_estimate_handler(Json(body)).await;
        let estimate = &response.0["estimate"];

        assert_eq!(estimate["base_cost"], 3.8);
        assert_eq!(estimate["optimization_savings"], 0.0);
        assert_eq!(estimate["final_cost"], 3.8);
        assert_eq!(estimate["estimated_execution_time_seconds"], 100);
    }

    #[tokio::test]
    async fn cost_estimate_applies_optimization_discount() {
        let body: CostEstimateRequest = serde_json::from_value(serde_json::json!({
            "shots": 10_000,
            "backend": "ibm_kyoto",
            "optimized": true,
        }))
        .unwrap();
        let response = cost_estimate_handler(Json(body)).await;
        let estimate = &response.0["estimate"];

        assert_eq!(estimate["base_cost"], 4.5);
        assert_eq!(estimate["optimization_savings"], 0.675);
        assert_eq!(estimate["final_cost"], 3.825);
    }

    #[tokio::test]
    async fn cost_estimate_unknown_backend_uses_default_rate() {
        let body: CostEstimateRequest = serde_json::from_value(serde_json::json!({
            "shots": 1000,
            "backend": "not_a_backend",
        }))
        .unwrap();
        let response = cost_estimate_handler(Json(body)).await;
        assert_eq!(response.0["estimate"]["base_cost"], 0.42);
    }

    #[tokio::test]
    async fn cost_estimate_rounds_partial_execution_time_up() {
        let body: CostEstimateRequest =
            serde_json::from_value(serde_json::json!({ "shots": 150 })).unwrap();
        let response = cost_estimate_handler(Json(body)).await;
        assert_eq!(response.0["estimate"]["estimated_execution_time_seconds"], 2);
    }

    #[tokio::test]
    async fn optimize_reduces_depth_by_level_factor() {
        let body: OptimizeRequest = serde_json::from_value(serde_json::json!({
            "depth": 100,
            "optimization_level": 2,
        }))
        .unwrap();
        let response = optimize_handler(Json(body)).await;
        let result = &response.0["result"];

        assert_eq!(result["original_depth"], 100);
        assert_eq!(result["optimized_depth"], 70);
        assert_eq!(result["reduction_percent"], 30.0);
        assert_eq!(result["transpilation_time_ms"], 250);
    }

    #[tokio::test]
    async fn optimize_defaults_to_level_three() {
        let body: OptimizeRequest = serde_json::from_str("{}").unwrap();
        let response = optimize_handler(Json(body)).await;
        let result = &response.0["result"];

        assert_eq!(result["optimization_level"], 3);
        assert_eq!(result["optimized_depth"], 55);
        assert_eq!(result["estimated_fidelity_improvement"], 0.15);
    }

    #[tokio::test]
    async fn optimize_clamps_out_of_range_levels() {
        let body: OptimizeRequest = serde_json::from_value(serde_json::json!({
            "depth": 200,
            "optimization_level": 9,
        }))
        .unwrap();
        let response = optimize_handler(Json(body)).await;
        assert_eq!(response.0["result"]["optimization_level"], 3);
        assert_eq!(response.0["result"]["optimized_depth"], 110);
    }

    #[tokio::test]
    async fn optimize_handles_zero_depth() {
        let body: OptimizeRequest =
            serde_json::from_value(serde_json::json!({ "depth": 0 })).unwrap();
        let response = optimize_handler(Json(body)).await;
        assert_eq!(response.0["result"]["reduction_percent"], 0.0);
    }
}
