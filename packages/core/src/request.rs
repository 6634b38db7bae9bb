//! Request schemas for the operation execution endpoint.
//!
//! The wire format is an open JSON object: clients send arbitrary keys in
//! `parameters` and each operation reads the ones it cares about. The typed
//! fields below cover every key a generator consumes; everything else is
//! preserved in `extra` so unknown keys never cause a rejection.

use serde::{Deserialize, Serialize};

/// Default backend used when the request omits one.
pub const DEFAULT_BACKEND: &str = "ibm_brisbane";

/// Default shot count used when the request omits one.
pub const DEFAULT_SHOTS: u64 = 2048;

/// Body of `POST /api/operations/execute`.
///
/// `operation` is deliberately an open string: unrecognized names are valid
/// requests that receive the generic fallback result, so there is no closed
/// enum at the deserialization boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationRequest {
    pub operation: String,
    #[serde(default)]
    pub parameters: ParameterBag,
}

/// Open parameter object accompanying an operation request.
///
/// Known keys are typed; unrecognized keys land in `extra` and are ignored
/// by the generators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterBag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shots: Option<u64>,
    /// Ordered asset list consumed by the portfolio operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<AssetDescriptor>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ParameterBag {
    /// Returns the requested backend, or [`DEFAULT_BACKEND`] when absent.
    #[must_use]
    pub fn backend_or_default(&self) -> String {
        self.backend
            .clone()
            .unwrap_or_else(|| DEFAULT_BACKEND.to_string())
    }

    /// Returns the requested shot count, or [`DEFAULT_SHOTS`] when absent.
    #[must_use]
    pub fn shots_or_default(&self) -> u64 {
        self.shots.unwrap_or(DEFAULT_SHOTS)
    }
}

/// A single asset in a portfolio-optimization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDescriptor {
    pub symbol: String,
}
