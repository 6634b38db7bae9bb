//! `QSim` Core — operation dispatch, result generators, and request/response schemas.

pub mod dispatch;
pub mod envelope;
pub mod request;
pub mod sample;

pub use dispatch::{execute, DispatchError, OperationKind};
pub use envelope::{OperationResult, ResultEnvelope};
pub use request::{OperationRequest, ParameterBag, DEFAULT_BACKEND, DEFAULT_SHOTS};
pub use sample::{FixedSampler, Sampler, ThreadSampler};
