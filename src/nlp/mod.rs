//! Model client layer: trait seams over the two inference backends.

pub mod classifier;
pub mod ner;
#[cfg(feature = "onx")]
pub mod onnx;

pub use classifier::SequenceClassifier;
pub use ner::{Ner, RawEntity};
