//! Error taxonomy for model loading and invocation.

use thiserror::Error;

/// Failures surfaced by the model clients and their wrappers.
///
/// `Load` aborts startup. The other variants are caught per item during
/// batch processing, though `ScoreArity` indicates a misconfigured
/// classifier and should be treated as fatal by operators.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Model assets could not be resolved or the runtime failed to start.
    #[error("model load failed: {0}")]
    Load(String),

    /// The underlying model failed while scoring a text.
    #[error("inference failed: {0}")]
    Inference(String),

    /// The classifier emitted a different number of scores than the fixed
    /// label set. A configuration mismatch, not a per-request condition.
    #[error("classifier returned {got} scores where {expected} were expected (model configuration mismatch)")]
    ScoreArity { expected: usize, got: usize },
}
