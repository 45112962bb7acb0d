// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Question schema types shared by the validator and the session.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One entry in the question schema list.
///
/// Typed records are decoded from raw values only after
/// [`crate::validate`] reports no violations, so a value of this type is
/// always schema-valid.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct QuestionRecord {
    /// Prompt text shown to the operator.
    pub question: String,

    /// When true, an empty answer is rejected.
    pub required: bool,

    /// Expected shape of the answer.
    #[serde(rename = "type")]
    pub question_type: QuestionType,

    /// Options for `choice` questions, in declared order.
    ///
    /// Ignored for the other types, so a junk value here must not fail
    /// the typed decode.
    #[serde(default, deserialize_with = "lenient_choices")]
    pub choices: Vec<String>,
}

/// Closed set of recognized question types.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Text,
    Number,
    Boolean,
    Choice,
}

impl QuestionType {
    /// Serialized names, in schema-documentation order.
    pub const NAMES: [&'static str; 4] = ["text", "number", "boolean", "choice"];

    /// The serialized (lowercase) name of this type.
    pub fn name(self) -> &'static str {
        match self {
            QuestionType::Text => "text",
            QuestionType::Number => "number",
            QuestionType::Boolean => "boolean",
            QuestionType::Choice => "choice",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode raw records into typed ones.
///
/// Intended for sequences that already passed [`crate::validate`]; on
/// malformed input this surfaces the decoder's own error instead of a
/// field-level report.
pub fn decode_records(records: Vec<Value>) -> Result<Vec<QuestionRecord>, serde_json::Error> {
    serde_json::from_value(Value::Array(records))
}

/// Accept any value for `choices`, keeping only a list of strings.
fn lenient_choices<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(choice) => Some(choice),
            _ => None,
        })
        .collect())
}

/// Accepted answers keyed by zero-based question index.
///
/// Built by the session, one entry per accepted answer, in question
/// order. Iteration yields entries in index order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerMapping {
    answers: BTreeMap<usize, String>,
}

impl AnswerMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the accepted answer for a question.
    pub fn insert(&mut self, index: usize, answer: String) {
        self.answers.insert(index, answer);
    }

    /// Look up the accepted answer for a question.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.answers
            .iter()
            .map(|(index, answer)| (*index, answer.as_str()))
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
