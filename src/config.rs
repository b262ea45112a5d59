//! Runtime configuration utilities for onco-text.

use std::env;

use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Classification model: a local directory or a Hugging Face model id.
    pub classifier_model: String,
    /// NER model: a local directory or a Hugging Face model id.
    pub ner_model: String,
    /// Intra-op thread count for ONNX sessions.
    pub intra_threads: usize,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let classifier_model = env::var("CLASSIFIER_MODEL")
            .unwrap_or_else(|_| "user1729/BiomedBERT-cancer-bert-classifier-v1.0".to_string());
        let ner_model = env::var("NER_MODEL")
            .unwrap_or_else(|_| "alvaroalon2/biobert_diseases_ner".to_string());
        let intra_threads = env::var("INTRA_THREADS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4);

        Ok(Self {
            classifier_model,
            ner_model,
            intra_threads,
        })
    }
}
