//! Token-level NER client. Lexicon-backed fallback; ONNX backend behind `onx`.

use std::sync::Arc;

use anyhow::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{config::Settings, error::ModelError};

/// One token-span as emitted by the NER model, offsets relative to the
/// source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntity {
    pub word: String,
    pub entity_group: String,
    pub start: usize,
    pub end: usize,
    pub score: f64,
}

/// Trait for NER implementations.
pub trait Ner: Send + Sync {
    /// Token-level entity spans for `text`, ordered by start offset.
    fn entities(&self, text: &str) -> Result<Vec<RawEntity>, ModelError>;
}

static DISEASE_TERMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "breast cancer",
        "lung cancer",
        "skin cancer",
        "cancer",
        "melanoma",
        "carcinoma",
        "astrocytoma",
        "medulloblastoma",
        "meningioma",
        "mesothelioma",
        "leukemia",
        "lymphoma",
        "sarcoma",
        "neoplasm",
        "tumor",
        "diabetes",
        "asthma",
        "pneumonia",
        "hepatitis",
    ]
});

/// Dictionary scan standing in for a transformer NER model. Every hit is
/// labelled `Disease`, matching the upstream model's entity group.
struct LexiconNer;

impl Ner for LexiconNer {
    fn entities(&self, text: &str) -> Result<Vec<RawEntity>, ModelError> {
        let lower = text.to_lowercase();
        let mut spans = Vec::new();
        for term in DISEASE_TERMS.iter() {
            let mut start_pos = 0;
            while let Some(pos) = lower[start_pos..].find(term) {
                let start = start_pos + pos;
                let end = start + term.len();
                spans.push(RawEntity {
                    word: text.get(start..end).unwrap_or(term).to_string(),
                    entity_group: "Disease".to_string(),
                    start,
                    end,
                    score: 0.8,
                });
                start_pos = end;
            }
        }
        spans.sort_by_key(|span| (span.start, span.end));
        Ok(spans)
    }
}

/// Lexicon-backed fallback, also exercised directly by integration tests.
pub fn lexicon() -> Arc<dyn Ner> {
    Arc::new(LexiconNer)
}

/// Load the configured NER backend.
pub async fn load_model(settings: &Settings) -> Result<Arc<dyn Ner>> {
    info!(model = %settings.ner_model, "loading extraction model");

    #[cfg(feature = "onx")]
    let model: Arc<dyn Ner> = Arc::new(super::onnx::OnnxNer::load(settings)?);

    #[cfg(not(feature = "onx"))]
    let model: Arc<dyn Ner> = lexicon();

    Ok(model)
}
