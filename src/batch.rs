//! Batch orchestration over the classification and extraction stages.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    classify::{CancerClassifier, ClassificationResult},
    config::Settings,
    error::ModelError,
    extract::CancerExtractor,
    nlp,
};

/// Fixed text used by the health probe to confirm both models answer.
pub const PROBE_TEXT: &str = "breast cancer diagnosis";

/// Outcome of one processing stage for one text.
///
/// Failures serialize as `{"error": message}`; callers detect errors by
/// field presence, never by message content.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StageOutcome<T> {
    Success(T),
    Failure { error: String },
}

impl<T> StageOutcome<T> {
    fn capture(result: Result<T, ModelError>, stage: &str, text: &str) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => {
                warn!(stage, error = %err, text = preview(text), "stage failed");
                Self::Failure {
                    error: err.to_string(),
                }
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure { error } => Some(error),
            Self::Success(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Per-input-text record combining both stage outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingResult {
    pub text: String,
    pub classification: StageOutcome<ClassificationResult>,
    pub extraction: StageOutcome<BTreeSet<String>>,
    pub error: Option<String>,
}

/// The long-lived processing service: both model wrappers, constructed once
/// at startup and immutable afterwards.
pub struct TextProcessor {
    classifier: CancerClassifier,
    extractor: CancerExtractor,
}

impl TextProcessor {
    pub fn new(classifier: CancerClassifier, extractor: CancerExtractor) -> Self {
        Self {
            classifier,
            extractor,
        }
    }

    /// Load both configured backends. A failure here is fatal; the service
    /// does not run in a degraded single-model mode.
    pub async fn load(settings: &Settings) -> Result<Self> {
        let classifier = nlp::classifier::load_model(settings)
            .await
            .context("loading classification model")?;
        let ner = nlp::ner::load_model(settings)
            .await
            .context("loading extraction model")?;
        info!("models loaded");
        Ok(Self::new(
            CancerClassifier::new(classifier),
            CancerExtractor::new(ner),
        ))
    }

    /// Run both stages over the batch, sequentially and in order.
    ///
    /// Stage failures are recorded on the affected result and never abort
    /// the rest of the batch.
    pub fn process(&self, texts: &[String]) -> Vec<ProcessingResult> {
        texts.iter().map(|text| self.process_one(text)).collect()
    }

    fn process_one(&self, text: &str) -> ProcessingResult {
        let classification =
            StageOutcome::capture(self.classifier.predict(text), "classification", text);
        let extraction = StageOutcome::capture(self.extractor.predict(text), "extraction", text);
        let error = classification
            .error()
            .or_else(|| extraction.error())
            .map(str::to_string);
        ProcessingResult {
            text: text.to_string(),
            classification,
            extraction,
            error,
        }
    }

    /// Model-load sanity check: run both stages once over the fixed probe.
    pub fn probe(&self) -> Result<(), ModelError> {
        self.classifier.predict(PROBE_TEXT)?;
        self.extractor.predict(PROBE_TEXT)?;
        Ok(())
    }
}

fn preview(text: &str) -> &str {
    let end = text
        .char_indices()
        .nth(50)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    &text[..end]
}
