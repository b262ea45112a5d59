use onco_text::extract::merge::{extract_diseases, merge_subwords};
use onco_text::nlp::RawEntity;
use proptest::prelude::*;

fn entity(word: &str, group: &str, start: usize, end: usize, score: f64) -> RawEntity {
    RawEntity {
        word: word.to_string(),
        entity_group: group.to_string(),
        start,
        end,
        score,
    }
}

#[test]
fn touching_disease_fragments_merge_into_one_word() {
    let merged = merge_subwords(vec![
        entity("mela", "Disease", 0, 4, 0.9),
        entity("##noma", "Disease", 4, 8, 0.7),
    ]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].word, "melanoma");
    assert_eq!(merged[0].start, 0);
    assert_eq!(merged[0].end, 8);
    assert!((merged[0].score - 0.8).abs() < 1e-9);
}

#[test]
fn three_way_merge_weighs_latest_pair() {
    let merged = merge_subwords(vec![
        entity("mela", "Disease", 0, 4, 1.0),
        entity("##no", "Disease", 4, 6, 1.0),
        entity("##ma", "Disease", 6, 8, 0.0),
    ]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].word, "melanoma");
    assert_eq!(merged[0].end, 8);
    // Pairwise averaging, not a weighted mean over all three constituents.
    assert!((merged[0].score - 0.5).abs() < 1e-9);
}

#[test]
fn offset_gap_prevents_merging() {
    let merged = merge_subwords(vec![
        entity("lung", "Disease", 0, 4, 0.9),
        entity("cancer", "Disease", 5, 11, 0.9),
    ]);
    assert_eq!(merged.len(), 2);
}

#[test]
fn non_disease_label_prevents_merging() {
    let merged = merge_subwords(vec![
        entity("tamo", "Chemical", 0, 4, 0.9),
        entity("##xifen", "Chemical", 4, 10, 0.9),
    ]);
    assert_eq!(merged.len(), 2);
}

#[test]
fn group_label_match_is_case_insensitive_substring() {
    let merged = merge_subwords(vec![
        entity("leuk", "B-DISEASE", 0, 4, 0.6),
        entity("##emia", "I-DISEASE", 4, 8, 0.6),
    ]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].word, "leukemia");
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(merge_subwords(Vec::new()).is_empty());
}

#[test]
fn disease_filter_drops_other_groups_and_keeps_order() {
    let merged = vec![
        entity("melanoma", "Disease", 0, 8, 0.9),
        entity("aspirin", "Chemical", 10, 17, 0.9),
        entity("lymphoma", "Disease", 20, 28, 0.9),
    ];
    assert_eq!(extract_diseases(&merged), vec!["melanoma", "lymphoma"]);
}

proptest! {
    #[test]
    fn gapped_disease_spans_never_merge(
        spans in prop::collection::vec((1usize..4, 2usize..6, 0.0f64..1.0), 1..8)
    ) {
        let mut cursor = 0usize;
        let mut entities = Vec::new();
        for (gap, len, score) in spans {
            cursor += gap;
            entities.push(entity("x", "Disease", cursor, cursor + len, score));
            cursor += len;
        }
        let merged = merge_subwords(entities.clone());
        prop_assert_eq!(merged, entities);
    }
}
