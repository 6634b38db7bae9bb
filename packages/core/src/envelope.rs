//! Response envelope and per-operation result payloads.
//!
//! Every operation returns the same outer envelope; only `result` changes
//! shape. The enum serializes untagged so the wire output is the plain
//! per-operation object, with no discriminator key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Uniform outer structure wrapping every operation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// Echo of the requested operation name.
    pub operation: String,
    /// Completion instant, RFC 3339 / ISO-8601.
    pub timestamp: String,
    pub backend: String,
    pub shots: u64,
    /// Simulated wall-clock execution time in seconds, in `[0.5, 2.5)`.
    pub execution_time: f64,
    pub result: OperationResult,
}

/// Operation-specific payload carried in [`ResultEnvelope::result`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperationResult {
    Coherence(CoherenceResult),
    Workflow(WorkflowResult),
    Disentangle(DisentangleResult),
    Portfolio(PortfolioResult),
    Generic(GenericResult),
}

/// Bell-state coherence figures plus measurement counts.
///
/// `counts` uses a `BTreeMap` so bitstring keys serialize in a stable order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoherenceResult {
    pub fidelity: f64,
    pub coherence: f64,
    pub bell_violation: f64,
    pub counts: BTreeMap<String, u64>,
}

/// Variational-workflow convergence figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowResult {
    pub wgf_cost: f64,
    pub fidelity_cost: f64,
    pub gradient_variance: f64,
    pub convergence_rate: f64,
}

/// Feature-disentanglement figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisentangleResult {
    pub separability: f64,
    pub mutual_information: f64,
    pub feature_clusters: u32,
    pub monosemantic_score: f64,
}

/// Portfolio-optimization output: one allocation per input asset, in input
/// order, plus aggregate risk/return figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioResult {
    pub optimal_allocation: Vec<AssetAllocation>,
    pub expected_return: f64,
    pub sharpe_ratio: f64,
    pub risk: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetAllocation {
    pub symbol: String,
    pub allocation: f64,
}

/// Fallback payload for unrecognized operation names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericResult {
    pub status: String,
    pub message: String,
}
