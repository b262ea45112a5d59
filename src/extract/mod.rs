//! Entity extraction pipeline: NER output to cancer-related mention set.

pub mod cancer;
pub mod clean;
pub mod merge;

use std::{collections::BTreeSet, sync::Arc};

use tracing::debug;

use crate::{error::ModelError, nlp::Ner};

/// Marker left on a token fragment that continues the previous word.
pub const CONTINUATION_MARKER: &str = "##";

/// End-to-end extraction over an injected NER backend.
///
/// Everything after the model call is a pure function over the returned
/// spans; only the model call itself can fail.
pub struct CancerExtractor {
    ner: Arc<dyn Ner>,
}

impl CancerExtractor {
    pub fn new(ner: Arc<dyn Ner>) -> Self {
        Self { ner }
    }

    /// Cancer-related mention set for `text`.
    pub fn predict(&self, text: &str) -> Result<BTreeSet<String>, ModelError> {
        let entities = self.ner.entities(text)?;
        let merged = merge::merge_subwords(entities);
        let diseases = merge::extract_diseases(&merged);
        let cleaned = clean::clean_mentions(&diseases);
        let detected = cancer::detect_cancer(&cleaned);
        debug!(
            mentions = diseases.len(),
            detected = detected.len(),
            "extraction pass complete"
        );
        Ok(detected)
    }
}
