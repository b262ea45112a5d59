#![cfg(feature = "onx")]

//! ONNX Runtime backends for the classifier and NER traits.
//!
//! Both backends expect Hugging Face style exports: `model.onnx` (or
//! `onnx/model.onnx`), `tokenizer.json`, and `config.json` with an
//! `id2label` table for token classification. Assets are read from a local
//! directory when the configured model is one, otherwise fetched from the
//! hub.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Mutex,
};

use hf_hub::api::sync::Api;
use ndarray::Array2;
use ort::{
    session::{builder::GraphOptimizationLevel, Session},
    value::Tensor,
};
use tokenizers::Tokenizer;
use tracing::info;

use crate::{
    config::Settings,
    error::ModelError,
    nlp::{classifier::SequenceClassifier, ner::{Ner, RawEntity}},
};

fn resolve_asset(model: &str, file: &str) -> Result<PathBuf, ModelError> {
    let local = Path::new(model).join(file);
    if local.exists() {
        return Ok(local);
    }
    let api = Api::new().map_err(|e| ModelError::Load(format!("hub api: {e}")))?;
    api.model(model.to_string())
        .get(file)
        .map_err(|e| ModelError::Load(format!("{file} for {model}: {e}")))
}

fn resolve_model_file(model: &str) -> Result<PathBuf, ModelError> {
    resolve_asset(model, "model.onnx").or_else(|_| resolve_asset(model, "onnx/model.onnx"))
}

fn build_session(model_path: &Path, intra_threads: usize) -> Result<Session, ModelError> {
    Session::builder()
        .map_err(|e| ModelError::Load(e.to_string()))?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .map_err(|e| ModelError::Load(e.to_string()))?
        .with_intra_threads(intra_threads)
        .map_err(|e| ModelError::Load(e.to_string()))?
        .commit_from_file(model_path)
        .map_err(|e| ModelError::Load(format!("{}: {e}", model_path.display())))
}

fn load_tokenizer(model: &str) -> Result<Tokenizer, ModelError> {
    let path = resolve_asset(model, "tokenizer.json")?;
    Tokenizer::from_file(&path).map_err(|e| ModelError::Load(format!("tokenizer: {e}")))
}

/// `id2label` table from `config.json`, keyed by class index.
fn load_id_to_label(model: &str) -> Result<HashMap<usize, String>, ModelError> {
    let path = resolve_asset(model, "config.json")?;
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| ModelError::Load(format!("config.json: {e}")))?;
    let config: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| ModelError::Load(format!("config.json: {e}")))?;

    let mut map = HashMap::new();
    if let Some(labels) = config.get("id2label").and_then(|v| v.as_object()) {
        for (id, label) in labels {
            if let (Ok(id), Some(label)) = (id.parse::<usize>(), label.as_str()) {
                map.insert(id, label.to_string());
            }
        }
    }
    if map.is_empty() {
        map.insert(0, "O".to_string());
        map.insert(1, "B-DISEASE".to_string());
        map.insert(2, "I-DISEASE".to_string());
    }
    Ok(map)
}

struct EncodedInputs {
    input_ids: Tensor<i64>,
    attention_mask: Tensor<i64>,
    token_type_ids: Tensor<i64>,
}

fn encode(tokenizer: &Tokenizer, text: &str) -> Result<(tokenizers::Encoding, EncodedInputs), ModelError> {
    let encoding = tokenizer
        .encode(text, true)
        .map_err(|e| ModelError::Inference(format!("tokenize: {e}")))?;

    let seq_len = encoding.get_ids().len();
    let ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
    let mask: Vec<i64> = encoding
        .get_attention_mask()
        .iter()
        .map(|&m| m as i64)
        .collect();
    let type_ids = vec![0i64; seq_len];

    let to_tensor = |data: Vec<i64>| -> Result<Tensor<i64>, ModelError> {
        let array: Array2<i64> = Array2::from_shape_vec((1, seq_len), data)
            .map_err(|e| ModelError::Inference(e.to_string()))?;
        Tensor::from_array(array).map_err(|e| ModelError::Inference(e.to_string()))
    };

    let inputs = EncodedInputs {
        input_ids: to_tensor(ids)?,
        attention_mask: to_tensor(mask)?,
        token_type_ids: to_tensor(type_ids)?,
    };
    Ok((encoding, inputs))
}

fn softmax(logits: &[f32]) -> Vec<f64> {
    let max = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f64> = logits.iter().map(|&v| f64::from((v - max).exp())).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|v| v / sum).collect()
}

/// Sequence classification over an exported transformer.
pub struct OnnxSequenceClassifier {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
}

impl OnnxSequenceClassifier {
    pub fn load(settings: &Settings) -> Result<Self, ModelError> {
        let model = &settings.classifier_model;
        let session = build_session(&resolve_model_file(model)?, settings.intra_threads)?;
        let tokenizer = load_tokenizer(model)?;
        info!(%model, "classification session ready");
        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
        })
    }
}

impl SequenceClassifier for OnnxSequenceClassifier {
    fn scores(&self, text: &str) -> Result<Vec<f64>, ModelError> {
        let (_, inputs) = encode(&self.tokenizer, text)?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| ModelError::Inference(format!("session lock: {e}")))?;
        let outputs = session
            .run(ort::inputs![
                "input_ids" => inputs.input_ids.into_dyn(),
                "attention_mask" => inputs.attention_mask.into_dyn(),
                "token_type_ids" => inputs.token_type_ids.into_dyn(),
            ])
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let logits = outputs
            .get("logits")
            .ok_or_else(|| ModelError::Inference("output has no logits tensor".to_string()))?;
        let (shape, data) = logits
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::Inference(e.to_string()))?;
        if shape.len() != 2 || shape[0] != 1 {
            return Err(ModelError::Inference(format!(
                "unexpected logits shape {shape:?}"
            )));
        }

        Ok(softmax(data))
    }
}

/// Token classification (BIO tags) over an exported transformer.
///
/// Adjacent tokens sharing an entity group are folded into one span before
/// returning, mirroring the upstream pipeline's simple aggregation
/// strategy; the word field is the covered source slice.
pub struct OnnxNer {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    id_to_label: HashMap<usize, String>,
}

impl OnnxNer {
    pub fn load(settings: &Settings) -> Result<Self, ModelError> {
        let model = &settings.ner_model;
        let session = build_session(&resolve_model_file(model)?, settings.intra_threads)?;
        let tokenizer = load_tokenizer(model)?;
        let id_to_label = load_id_to_label(model)?;
        info!(%model, labels = id_to_label.len(), "extraction session ready");
        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            id_to_label,
        })
    }
}

struct SpanAccumulator {
    start: usize,
    end: usize,
    group: String,
    score_sum: f64,
    tokens: usize,
}

impl SpanAccumulator {
    fn into_entity(self, text: &str) -> RawEntity {
        RawEntity {
            word: text.get(self.start..self.end).unwrap_or_default().to_string(),
            entity_group: self.group,
            start: self.start,
            end: self.end,
            score: self.score_sum / self.tokens as f64,
        }
    }
}

impl Ner for OnnxNer {
    fn entities(&self, text: &str) -> Result<Vec<RawEntity>, ModelError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let (encoding, inputs) = encode(&self.tokenizer, text)?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| ModelError::Inference(format!("session lock: {e}")))?;
        let outputs = session
            .run(ort::inputs![
                "input_ids" => inputs.input_ids.into_dyn(),
                "attention_mask" => inputs.attention_mask.into_dyn(),
                "token_type_ids" => inputs.token_type_ids.into_dyn(),
            ])
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let logits = outputs
            .get("logits")
            .ok_or_else(|| ModelError::Inference("output has no logits tensor".to_string()))?;
        let (shape, data) = logits
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::Inference(e.to_string()))?;
        if shape.len() != 3 || shape[0] != 1 {
            return Err(ModelError::Inference(format!(
                "unexpected logits shape {shape:?}"
            )));
        }

        let seq_len = shape[1] as usize;
        let num_labels = shape[2] as usize;
        let offsets = encoding.get_offsets();

        let mut entities = Vec::new();
        let mut active: Option<SpanAccumulator> = None;

        for token_idx in 0..seq_len.min(offsets.len()) {
            let (char_start, char_end) = offsets[token_idx];
            let token_logits = &data[token_idx * num_labels..(token_idx + 1) * num_labels];
            let probs = softmax(token_logits);
            let (label_idx, prob) = probs
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(idx, p)| (idx, *p))
                .unwrap_or((0, 0.0));
            let label = self
                .id_to_label
                .get(&label_idx)
                .map(String::as_str)
                .unwrap_or("O");

            // Special tokens carry empty offsets; they and O tags end a span.
            if char_start == char_end || label == "O" {
                if let Some(acc) = active.take() {
                    entities.push(acc.into_entity(text));
                }
                continue;
            }

            let group = label
                .strip_prefix("B-")
                .or_else(|| label.strip_prefix("I-"))
                .unwrap_or(label)
                .to_string();

            match active.as_mut() {
                Some(acc) if acc.group == group => {
                    acc.end = char_end;
                    acc.score_sum += prob;
                    acc.tokens += 1;
                }
                _ => {
                    if let Some(acc) = active.take() {
                        entities.push(acc.into_entity(text));
                    }
                    active = Some(SpanAccumulator {
                        start: char_start,
                        end: char_end,
                        group,
                        score_sum: prob,
                        tokens: 1,
                    });
                }
            }
        }
        if let Some(acc) = active {
            entities.push(acc.into_entity(text));
        }

        Ok(entities)
    }
}
