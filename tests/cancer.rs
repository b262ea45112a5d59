use std::collections::BTreeSet;

use onco_text::extract::cancer::{detect_cancer, CANCER_VOCABULARY};

fn set(mentions: &[&str]) -> BTreeSet<String> {
    mentions.iter().map(|m| m.to_string()).collect()
}

#[test]
fn vocabulary_substrings_select_mentions() {
    let detected = detect_cancer(&set(&["skin melanomas", "healthy", "big tumor case"]));
    assert_eq!(detected, set(&["skin melanomas", "big tumor case"]));
}

#[test]
fn containment_needs_no_word_boundary() {
    let detected = detect_cancer(&set(&["tumors"]));
    assert_eq!(detected, set(&["tumors"]));
}

#[test]
fn unrelated_mentions_are_dropped() {
    assert!(detect_cancer(&set(&["asthma", "diabetes"])).is_empty());
}

#[test]
fn vocabulary_is_lowercase() {
    // Matching lowercases the mention only, so the terms must stay lowercase.
    assert!(CANCER_VOCABULARY.iter().all(|t| t.chars().all(|c| c.is_ascii_lowercase())));
}
