// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema validation for raw question records.
//!
//! Validation runs on raw [`serde_json::Value`]s rather than typed
//! records so that malformed entries produce field-level messages instead
//! of a single decode error.

use crate::schema::QuestionType;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

const QUESTION_MSG: &str = "Field 'question' is required and must be a string.";
const REQUIRED_MSG: &str = "Field 'required' is required and must be a boolean.";
const TYPE_MSG: &str =
    "Field 'type' is required and must be one of: 'text', 'number', 'boolean', 'choice'.";
const CHOICES_MSG: &str =
    "For 'type' == 'choice', 'choices' field is required and must be a non-empty list of strings.";

/// Sparse mapping from record index to that record's violation messages.
///
/// An index with no violations never appears; an empty report means every
/// record is schema-valid. Built once by [`validate`], immutable after.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrorReport {
    violations: BTreeMap<usize, Vec<String>>,
}

impl ValidationErrorReport {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of invalid records.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Violation messages for one record, in check order.
    pub fn messages(&self, index: usize) -> Option<&[String]> {
        self.violations.get(&index).map(Vec::as_slice)
    }

    /// Invalid records in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.violations
            .iter()
            .map(|(index, messages)| (*index, messages.as_slice()))
    }
}

impl fmt::Display for ValidationErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, messages) in &self.violations {
            writeln!(f, "question {}:", index)?;
            for message in messages {
                writeln!(f, "  - {}", message)?;
            }
        }
        Ok(())
    }
}

/// Check every raw record against the schema contract.
///
/// Records are checked independently and the report always covers the
/// full sequence. Per record the checks run in a fixed order: `question`,
/// `required`, `type`, `choices`. The `choices` check is gated on the
/// literal value of `type`, not on the `type` check passing, so a record
/// with `type: "choice"` and a malformed `question` still gets a
/// choices-specific message, while a record missing `type` gets none.
pub fn validate(records: &[Value]) -> ValidationErrorReport {
    let mut report = ValidationErrorReport::default();
    for (index, record) in records.iter().enumerate() {
        let messages = check_record(record);
        if !messages.is_empty() {
            report.violations.insert(index, messages);
        }
    }
    report
}

fn check_record(record: &Value) -> Vec<String> {
    let mut messages = Vec::new();
    if !record.get("question").is_some_and(Value::is_string) {
        messages.push(QUESTION_MSG.to_string());
    }
    if !record.get("required").is_some_and(Value::is_boolean) {
        messages.push(REQUIRED_MSG.to_string());
    }
    let question_type = record.get("type").and_then(Value::as_str);
    if !question_type.is_some_and(|name| QuestionType::NAMES.contains(&name)) {
        messages.push(TYPE_MSG.to_string());
    }
    if question_type == Some("choice") && !has_valid_choices(record) {
        messages.push(CHOICES_MSG.to_string());
    }
    messages
}

fn has_valid_choices(record: &Value) -> bool {
    record
        .get("choices")
        .and_then(Value::as_array)
        .is_some_and(|choices| !choices.is_empty() && choices.iter().all(Value::is_string))
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
