// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use serde_json::json;

fn valid_text_record() -> Value {
    json!({"question": "Name?", "required": true, "type": "text"})
}

#[test]
fn test_empty_sequence_is_valid() {
    assert!(validate(&[]).is_empty());
}

#[test]
fn test_well_formed_records_produce_empty_report() {
    let records = vec![
        json!({"question": "Name?", "required": true, "type": "text"}),
        json!({"question": "Age?", "required": false, "type": "number"}),
        json!({"question": "Subscribed?", "required": true, "type": "boolean"}),
        json!({"question": "Pick", "required": true, "type": "choice", "choices": ["a", "b"]}),
    ];

    let report = validate(&records);

    assert!(report.is_empty());
    assert_eq!(report.len(), 0);
}

#[test]
fn test_missing_question_field() {
    let records = vec![json!({"required": true, "type": "text"})];

    let report = validate(&records);

    assert_eq!(
        report.messages(0).unwrap(),
        ["Field 'question' is required and must be a string."]
    );
}

#[test]
fn test_non_string_question_field() {
    let records = vec![json!({"question": 7, "required": true, "type": "text"})];

    let report = validate(&records);

    assert_eq!(
        report.messages(0).unwrap(),
        ["Field 'question' is required and must be a string."]
    );
}

#[test]
fn test_missing_required_field() {
    let records = vec![json!({"question": "Name?", "type": "text"})];

    let report = validate(&records);

    assert_eq!(
        report.messages(0).unwrap(),
        ["Field 'required' is required and must be a boolean."]
    );
}

#[test]
fn test_non_boolean_required_field() {
    let records = vec![json!({"question": "Name?", "required": "yes", "type": "text"})];

    let report = validate(&records);

    assert_eq!(
        report.messages(0).unwrap(),
        ["Field 'required' is required and must be a boolean."]
    );
}

#[test]
fn test_missing_type_field() {
    let records = vec![json!({"question": "Name?", "required": true})];

    let report = validate(&records);

    // Also exercises the choices gate: with no `type` value at all there
    // must be no choices message.
    assert_eq!(
        report.messages(0).unwrap(),
        ["Field 'type' is required and must be one of: 'text', 'number', 'boolean', 'choice'."]
    );
}

#[test]
fn test_unrecognized_type_field() {
    let records = vec![json!({"question": "Name?", "required": true, "type": "date"})];

    let report = validate(&records);

    assert_eq!(
        report.messages(0).unwrap(),
        ["Field 'type' is required and must be one of: 'text', 'number', 'boolean', 'choice'."]
    );
}

#[test]
fn test_choice_without_choices() {
    let records = vec![json!({"question": "Pick", "required": true, "type": "choice"})];

    let report = validate(&records);

    assert_eq!(
        report.messages(0).unwrap(),
        ["For 'type' == 'choice', 'choices' field is required and must be a non-empty list of strings."]
    );
}

#[test]
fn test_choice_with_empty_choices() {
    let records = vec![json!({
        "question": "Pick", "required": true, "type": "choice", "choices": []
    })];

    let report = validate(&records);

    assert_eq!(report.messages(0).unwrap().len(), 1);
}

#[test]
fn test_choice_with_non_list_choices() {
    let records = vec![json!({
        "question": "Pick", "required": true, "type": "choice", "choices": "a"
    })];

    let report = validate(&records);

    assert_eq!(report.messages(0).unwrap().len(), 1);
}

#[test]
fn test_choice_with_non_string_elements() {
    let records = vec![json!({
        "question": "Pick", "required": true, "type": "choice", "choices": ["a", 2]
    })];

    let report = validate(&records);

    assert_eq!(
        report.messages(0).unwrap(),
        ["For 'type' == 'choice', 'choices' field is required and must be a non-empty list of strings."]
    );
}

#[test]
fn test_choices_check_gated_on_literal_type_value() {
    // `type: "choice"` with an otherwise malformed record still gets the
    // choices-specific message.
    let records = vec![json!({"type": "choice"})];

    let report = validate(&records);

    assert_eq!(
        report.messages(0).unwrap(),
        [
            "Field 'question' is required and must be a string.",
            "Field 'required' is required and must be a boolean.",
            "For 'type' == 'choice', 'choices' field is required and must be a non-empty list of strings.",
        ]
    );
}

#[test]
fn test_violation_messages_follow_check_order() {
    let records = vec![json!({})];

    let report = validate(&records);

    assert_eq!(
        report.messages(0).unwrap(),
        [
            "Field 'question' is required and must be a string.",
            "Field 'required' is required and must be a boolean.",
            "Field 'type' is required and must be one of: 'text', 'number', 'boolean', 'choice'.",
        ]
    );
}

#[test]
fn test_non_object_record_fails_field_checks() {
    let records = vec![json!("not a record")];

    let report = validate(&records);

    assert_eq!(report.messages(0).unwrap().len(), 3);
}

#[test]
fn test_records_validated_independently() {
    let records = vec![
        json!({"question": "Name?", "required": true}),
        valid_text_record(),
        json!({"question": 1, "required": true, "type": "text"}),
    ];

    let report = validate(&records);

    assert_eq!(report.len(), 2);
    assert!(report.messages(0).is_some());
    assert!(report.messages(1).is_none());
    assert!(report.messages(2).is_some());
}

#[test]
fn test_report_iterates_in_index_order() {
    let records = vec![json!({}), valid_text_record(), json!({})];

    let report = validate(&records);

    let indices: Vec<_> = report.iter().map(|(index, _)| index).collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn test_report_display_lists_each_record() {
    let records = vec![json!({"question": "Name?", "required": true})];

    let rendered = validate(&records).to_string();

    assert_eq!(
        rendered,
        "question 0:\n  - Field 'type' is required and must be one of: \
         'text', 'number', 'boolean', 'choice'.\n"
    );
}

#[test]
fn test_validate_is_pure() {
    let records = vec![json!({}), valid_text_record()];

    assert_eq!(validate(&records), validate(&records));
}
