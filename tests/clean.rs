use onco_text::extract::clean::clean_mentions;

fn owned(mentions: &[&str]) -> Vec<String> {
    mentions.iter().map(|m| m.to_string()).collect()
}

#[test]
fn punctuation_and_case_variants_collapse() {
    let cleaned = clean_mentions(&owned(&["Tumor!!", "tumor", "TU"]));
    assert_eq!(cleaned.len(), 1);
    assert!(cleaned.contains("tumor"));
}

#[test]
fn digits_become_spaces_inside_mentions() {
    let cleaned = clean_mentions(&owned(&["b12 deficiency"]));
    assert!(cleaned.contains("b   deficiency"));
}

#[test]
fn continuation_marker_characters_are_stripped() {
    let cleaned = clean_mentions(&owned(&["lung##carcinoma"]));
    assert_eq!(cleaned.len(), 1);
    assert!(cleaned.contains("lung  carcinoma"));
}

#[test]
fn overlong_mentions_are_dropped() {
    let long = "a".repeat(51);
    let cleaned = clean_mentions(&owned(&[&long, "melanoma"]));
    assert_eq!(cleaned.len(), 1);
    assert!(cleaned.contains("melanoma"));
}

#[test]
fn empty_input_yields_empty_set() {
    assert!(clean_mentions(&[]).is_empty());
}
