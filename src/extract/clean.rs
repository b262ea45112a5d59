//! Normalises extracted mention strings before vocabulary matching.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::CONTINUATION_MARKER;

static NON_ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new("[^A-Za-z]").expect("valid regex"));

const MIN_MENTION_LEN: usize = 3;
const MAX_MENTION_LEN: usize = 50;

/// Clean and deduplicate disease mentions.
///
/// Every non-ASCII-letter character becomes a space, the result is
/// lowercased and trimmed, and duplicates collapse via the set. Survivors
/// must have a length between 3 and 50 and must not contain the
/// continuation marker. The marker check cannot fire after the character
/// replacement above; it is kept because the upstream aggregation strategy
/// has been observed to leave other marker forms, and dropping it needs
/// confirmation against real model output first.
pub fn clean_mentions(mentions: &[String]) -> BTreeSet<String> {
    let mut unique = BTreeSet::new();
    for mention in mentions {
        let spaced = NON_ALPHA.replace_all(mention, " ");
        unique.insert(spaced.to_lowercase().trim().to_string());
    }
    unique
        .into_iter()
        .filter(|mention| {
            (MIN_MENTION_LEN..=MAX_MENTION_LEN).contains(&mention.len())
                && !mention.contains(CONTINUATION_MARKER)
        })
        .collect()
}
