//! Request and response DTOs for the JSON API.

use serde::{Deserialize, Serialize};

use crate::batch::ProcessingResult;

/// Either a single text or a batch. A single string is treated as a batch
/// of one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Single(String),
    Batch(Vec<String>),
}

impl TextInput {
    pub fn into_batch(self) -> Vec<String> {
        match self {
            Self::Single(text) => vec![text],
            Self::Batch(texts) => texts,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRequest {
    pub text: TextInput,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<ProcessingResult>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub models: [&'static str; 2],
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            models: ["classification", "extraction"],
        }
    }
}
