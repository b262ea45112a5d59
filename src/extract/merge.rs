//! Joins adjacent token-level spans into word-level disease mentions.

use crate::nlp::RawEntity;

use super::CONTINUATION_MARKER;

fn is_disease(group: &str) -> bool {
    group.to_ascii_lowercase().contains("disease")
}

/// Merge adjacent entities that continue the same disease mention.
///
/// An incoming entity is folded into the accumulator iff its start offset
/// exactly equals the accumulator's end offset and both group labels
/// indicate a disease. Folding appends the incoming word with the
/// continuation marker stripped, extends the end offset, and replaces the
/// score with the mean of the two. The mean is pairwise, so a three-way
/// merge weighs the most recent constituent at one half rather than one
/// third; downstream consumers rely on this behaviour.
pub fn merge_subwords(entities: Vec<RawEntity>) -> Vec<RawEntity> {
    let mut merged = Vec::with_capacity(entities.len());
    let mut current: Option<RawEntity> = None;

    for entity in entities {
        let Some(mut acc) = current.take() else {
            current = Some(entity);
            continue;
        };
        if entity.start == acc.end
            && is_disease(&entity.entity_group)
            && is_disease(&acc.entity_group)
        {
            acc.word
                .push_str(&entity.word.replace(CONTINUATION_MARKER, ""));
            acc.end = entity.end;
            acc.score = (acc.score + entity.score) / 2.0;
            current = Some(acc);
        } else {
            merged.push(acc);
            current = Some(entity);
        }
    }

    if let Some(last) = current {
        merged.push(last);
    }
    merged
}

/// Word fields of disease-labelled entities, in merge order.
pub fn extract_diseases(entities: &[RawEntity]) -> Vec<String> {
    entities
        .iter()
        .filter(|entity| is_disease(&entity.entity_group))
        .map(|entity| entity.word.clone())
        .collect()
}
