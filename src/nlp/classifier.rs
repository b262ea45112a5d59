//! Sequence classification client. Lexicon-backed fallback; ONNX behind `onx`.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::{config::Settings, error::ModelError, extract::cancer::CANCER_VOCABULARY};

/// Trait for binary sequence classifiers.
///
/// Implementations return one raw probability per class, in the model's
/// native class order. Label assignment happens in the wrapper layer.
pub trait SequenceClassifier: Send + Sync {
    fn scores(&self, text: &str) -> Result<Vec<f64>, ModelError>;
}

/// Keyword-evidence classifier standing in for a fine-tuned transformer.
///
/// Each cancer vocabulary hit pushes probability mass towards the positive
/// class; zero hits leave the text as Non-Cancer.
struct LexiconClassifier;

impl SequenceClassifier for LexiconClassifier {
    fn scores(&self, text: &str) -> Result<Vec<f64>, ModelError> {
        let lower = text.to_lowercase();
        let hits = CANCER_VOCABULARY
            .iter()
            .filter(|term| lower.contains(*term))
            .count() as f64;
        let cancer = hits / (hits + 1.0);
        Ok(vec![1.0 - cancer, cancer])
    }
}

/// Lexicon-backed fallback, also exercised directly by integration tests.
pub fn lexicon() -> Arc<dyn SequenceClassifier> {
    Arc::new(LexiconClassifier)
}

/// Load the configured classification backend.
pub async fn load_model(settings: &Settings) -> Result<Arc<dyn SequenceClassifier>> {
    info!(model = %settings.classifier_model, "loading classification model");

    #[cfg(feature = "onx")]
    let model: Arc<dyn SequenceClassifier> =
        Arc::new(super::onnx::OnnxSequenceClassifier::load(settings)?);

    #[cfg(not(feature = "onx"))]
    let model: Arc<dyn SequenceClassifier> = lexicon();

    Ok(model)
}
