//! Operation classification and result generation.
//!
//! The dispatcher is a pure function: classify the operation string, build
//! the common envelope, and route to one generator. Dispatch is deliberately
//! permissive — any string that matches no known operation takes the generic
//! branch and still succeeds. The only declared failures are structural
//! (portfolio requests without an asset list).

use tracing::debug;

use crate::envelope::{
    AssetAllocation, CoherenceResult, DisentangleResult, GenericResult, OperationResult,
    PortfolioResult, ResultEnvelope, WorkflowResult,
};
use crate::request::{AssetDescriptor, OperationRequest, ParameterBag};
use crate::sample::Sampler;

/// Declared dispatch failures.
///
/// Unknown operation names are not an error; they route to the generic
/// generator.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("operation 'finance_optimize_portfolio' requires an 'assets' array")]
    MissingAssets,
    #[error("request body must be a JSON object: {0}")]
    InvalidBody(String),
}

/// Known operation kinds, classified from the request's operation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Coherence,
    Workflow,
    Disentangle,
    PortfolioOptimize,
    /// Anything else, including the empty string.
    Other,
}

impl OperationKind {
    /// Maps an operation string to its kind. Never fails: unrecognized
    /// names (and the empty string) classify as [`OperationKind::Other`].
    #[must_use]
    pub fn classify(operation: &str) -> Self {
        match operation {
            "coherence" => Self::Coherence,
            "wflow" => Self::Workflow,
            "disentangle" => Self::Disentangle,
            "finance_optimize_portfolio" => Self::PortfolioOptimize,
            _ => Self::Other,
        }
    }
}

/// Executes one operation request against the given sampler.
///
/// Builds the common envelope (backend/shots defaulting, timestamp,
/// simulated execution time) and fills `result` from the operation's
/// generator.
///
/// # Errors
///
/// Returns [`DispatchError::MissingAssets`] when a portfolio request omits
/// its asset list. Every other input, including unknown operation names,
/// succeeds.
pub fn execute<S: Sampler>(
    request: &OperationRequest,
    sampler: &mut S,
) -> Result<ResultEnvelope, DispatchError> {
    let kind = OperationKind::classify(&request.operation);
    debug!(operation = %request.operation, ?kind, "dispatching operation");

    let params = &request.parameters;
    let shots = params.shots_or_default();
    let execution_time = sampler.uniform(0.5, 2.5);

    let result = match kind {
        OperationKind::Coherence => generate_coherence(shots, sampler),
        OperationKind::Workflow => generate_workflow(sampler),
        OperationKind::Disentangle => generate_disentangle(sampler),
        OperationKind::PortfolioOptimize => generate_portfolio(params, sampler)?,
        OperationKind::Other => generate_generic(&request.operation),
    };

    Ok(ResultEnvelope {
        operation: request.operation.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        backend: params.backend_or_default(),
        shots,
        execution_time,
        result,
    })
}

/// Scales a shot count by a fixed fraction, truncating toward zero.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_count(shots: u64, fraction: f64) -> u64 {
    (shots as f64 * fraction).floor() as u64
}

/// Bell-state figures. The measurement counts are deterministic in `shots`;
/// only the quality figures are sampled.
fn generate_coherence<S: Sampler>(shots: u64, sampler: &mut S) -> OperationResult {
    let mut counts = std::collections::BTreeMap::new();
    counts.insert("00".to_string(), scaled_count(shots, 0.48));
    counts.insert("11".to_string(), scaled_count(shots, 0.48));
    counts.insert("01".to_string(), scaled_count(shots, 0.02));
    counts.insert("10".to_string(), scaled_count(shots, 0.02));

    OperationResult::Coherence(CoherenceResult {
        fidelity: sampler.uniform(0.95, 0.99),
        coherence: sampler.uniform(0.98, 1.00),
        bell_violation: sampler.uniform(2.7, 2.8),
        counts,
    })
}

fn generate_workflow<S: Sampler>(sampler: &mut S) -> OperationResult {
    OperationResult::Workflow(WorkflowResult {
        wgf_cost: sampler.uniform(0.15, 0.25),
        fidelity_cost: sampler.uniform(0.85, 0.95),
        gradient_variance: sampler.uniform(0.02, 0.03),
        convergence_rate: sampler.uniform(0.92, 0.97),
    })
}

fn generate_disentangle<S: Sampler>(sampler: &mut S) -> OperationResult {
    OperationResult::Disentangle(DisentangleResult {
        separability: sampler.uniform(0.88, 0.98),
        mutual_information: sampler.uniform(0.12, 0.17),
        feature_clusters: 4,
        monosemantic_score: sampler.uniform(0.91, 0.99),
    })
}

/// One allocation per input asset, preserving input order. An empty asset
/// list is valid and yields an empty allocation.
fn generate_portfolio<S: Sampler>(
    params: &ParameterBag,
    sampler: &mut S,
) -> Result<OperationResult, DispatchError> {
    let assets: &[AssetDescriptor] = params
        .assets
        .as_deref()
        .ok_or(DispatchError::MissingAssets)?;

    let optimal_allocation = assets
        .iter()
        .map(|asset| AssetAllocation {
            symbol: asset.symbol.clone(),
            allocation: sampler.uniform(0.0, 0.3),
        })
        .collect();

    Ok(OperationResult::Portfolio(PortfolioResult {
        optimal_allocation,
        expected_return: sampler.uniform(0.12, 0.15),
        sharpe_ratio: sampler.uniform(1.5, 2.0),
        risk: sampler.uniform(0.15, 0.20),
    }))
}

fn generate_generic(operation: &str) -> OperationResult {
    OperationResult::Generic(GenericResult {
        status: "completed".to_string(),
        message: format!("Operation {operation} executed successfully"),
    })
}
