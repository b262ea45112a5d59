use onco_text::batch::{TextProcessor, PROBE_TEXT};
use onco_text::classify::CancerClassifier;
use onco_text::extract::CancerExtractor;
use onco_text::nlp::{classifier, ner};

const NOTE: &str = "Patient history includes breast cancer and a resected skin melanoma.";

#[test]
fn extraction_keeps_only_cancer_related_mentions() {
    let extractor = CancerExtractor::new(ner::lexicon());
    let detected = extractor
        .predict("Follow-up for asthma, diabetes, and lung carcinoma.")
        .unwrap();
    assert!(detected.contains("carcinoma"));
    assert!(!detected.contains("asthma"));
    assert!(!detected.contains("diabetes"));
}

#[test]
fn extraction_is_idempotent_for_a_deterministic_backend() {
    let extractor = CancerExtractor::new(ner::lexicon());
    let first = extractor.predict(NOTE).unwrap();
    let second = extractor.predict(NOTE).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("breast cancer"));
    assert!(first.contains("melanoma"));
}

#[test]
fn probe_text_passes_the_lexicon_pipeline() {
    let processor = TextProcessor::new(
        CancerClassifier::new(classifier::lexicon()),
        CancerExtractor::new(ner::lexicon()),
    );
    assert!(processor.probe().is_ok());

    let results = processor.process(&[PROBE_TEXT.to_string()]);
    assert_eq!(results.len(), 1);
    assert!(results[0].error.is_none());
}
