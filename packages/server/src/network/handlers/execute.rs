//! The operation execution endpoint.
//!
//! `POST /api/operations/execute` accepts `{ operation, parameters }` and
//! returns the result envelope produced by the core dispatcher. The handler
//! takes the raw body rather than a `Json` extractor so every failure mode
//! (non-object body, malformed parameters, missing portfolio assets) is
//! surfaced as the documented `{ "error": "Operation failed", ... }`
//! response instead of an extractor rejection.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use qsim_core::{execute, DispatchError, OperationRequest, ThreadSampler};

/// Handles `POST /api/operations/execute`.
///
/// Success: 200 with the serialized `ResultEnvelope`.
/// Failure: 500 with `{ "error": "Operation failed", "details": <message> }`.
pub async fn execute_handler(body: Bytes) -> Response {
    let request: OperationRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            let err = DispatchError::InvalidBody(err.to_string());
            return failure_response(&err);
        }
    };

    // Per-call sampler: no RNG state is shared across requests.
    let mut sampler = ThreadSampler::new();
    match execute(&request, &mut sampler) {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(err) => failure_response(&err),
    }
}

fn failure_response(err: &DispatchError) -> Response {
    warn!(error = %err, "operation execution failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Operation failed",
            "details": err.to_string(),
        })),
    )
        .into_response()
}
