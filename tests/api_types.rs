use onco_text::api::types::ProcessRequest;

#[test]
fn single_string_becomes_a_batch_of_one() {
    let request: ProcessRequest = serde_json::from_str(r#"{"text": "breast cancer"}"#).unwrap();
    assert_eq!(request.text.into_batch(), vec!["breast cancer"]);
}

#[test]
fn string_list_is_accepted_in_order() {
    let request: ProcessRequest =
        serde_json::from_str(r#"{"text": ["first note", "second note"]}"#).unwrap();
    assert_eq!(request.text.into_batch(), vec!["first note", "second note"]);
}

#[test]
fn non_string_payloads_are_rejected_before_any_model_call() {
    assert!(serde_json::from_str::<ProcessRequest>(r#"{"text": 42}"#).is_err());
    assert!(serde_json::from_str::<ProcessRequest>(r#"{"text": [1, 2]}"#).is_err());
    assert!(serde_json::from_str::<ProcessRequest>(r#"{}"#).is_err());
}
