//! Labelled confidence wrapper over the binary classifier.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{error::ModelError, nlp::SequenceClassifier};

/// Fixed label set, in the classifier's class-index order.
pub const LABELS: [&str; 2] = ["Non-Cancer", "Cancer"];

/// Two-label distribution with per-label confidence.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    pub predicted_labels: Vec<String>,
    /// Keyed by label, preserving the fixed label order.
    pub confidence_scores: IndexMap<String, f64>,
}

/// Maps raw classifier scores onto the fixed label pair.
///
/// The backend's class index 0 is assumed to be Non-Cancer; a model trained
/// with the opposite order is a contract violation this wrapper cannot
/// detect. A backend emitting a different number of scores is detected and
/// rejected as a configuration error.
pub struct CancerClassifier {
    backend: Arc<dyn SequenceClassifier>,
}

impl CancerClassifier {
    pub fn new(backend: Arc<dyn SequenceClassifier>) -> Self {
        Self { backend }
    }

    pub fn predict(&self, text: &str) -> Result<ClassificationResult, ModelError> {
        let scores = self.backend.scores(text)?;
        if scores.len() != LABELS.len() {
            return Err(ModelError::ScoreArity {
                expected: LABELS.len(),
                got: scores.len(),
            });
        }

        let confidence_scores = LABELS
            .iter()
            .zip(&scores)
            .map(|(label, score)| (label.to_string(), *score))
            .collect();
        Ok(ClassificationResult {
            predicted_labels: LABELS.iter().map(|label| label.to_string()).collect(),
            confidence_scores,
        })
    }
}
