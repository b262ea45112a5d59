//! Filters cleaned mentions against the cancer vocabulary.

use std::collections::BTreeSet;

/// Substrings that mark a mention as cancer-related.
pub const CANCER_VOCABULARY: &[&str] = &[
    "cancer",
    "astrocytoma",
    "medulloblastoma",
    "meningioma",
    "neoplasm",
    "carcinoma",
    "tumor",
    "melanoma",
    "mesothelioma",
    "leukemia",
    "lymphoma",
    "sarcomas",
];

/// Keep mentions containing at least one vocabulary term.
///
/// Pure case-insensitive substring containment: no stemming and no word
/// boundaries, so "tumors" matches "tumor".
pub fn detect_cancer(mentions: &BTreeSet<String>) -> BTreeSet<String> {
    mentions
        .iter()
        .filter(|mention| {
            let lower = mention.to_lowercase();
            CANCER_VOCABULARY.iter().any(|term| lower.contains(term))
        })
        .map(|mention| mention.to_lowercase())
        .collect()
}
