// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-answer acceptance rules.

use crate::schema::{QuestionRecord, QuestionType};
use thiserror::Error;

/// Why an answer was not accepted.
///
/// Always recoverable: the session shows the reason and asks again.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AnswerRejection {
    /// The question is required and the answer was empty.
    #[error("This field is required.")]
    Required,

    /// The answer value was not text. Unreachable through line-based
    /// input, which only ever produces strings; retained because the
    /// contract defines it.
    #[error("Expected a string.")]
    NotText,

    /// The answer did not parse as a floating-point numeral.
    #[error("Expected a number.")]
    NotNumber,

    /// The answer was not a recognized boolean literal.
    #[error("Expected 'true' or 'false'.")]
    NotBoolean,

    /// The answer matched none of the declared choices.
    #[error("Expected one of the following choices: {choices}.")]
    NotAChoice {
        /// The declared choices, joined with `", "`.
        choices: String,
    },
}

/// Decide whether `answer` is acceptable for `record`.
///
/// Short-circuits at the first applicable failure: the required check
/// runs first, then the check for the declared type. The type check runs
/// even when an optional question received an empty answer, so an
/// optional `number` question still rejects `""`.
///
/// Nothing is trimmed. `number` accepts whatever [`f64`]'s parser
/// accepts; `boolean` matches `true`/`false` ignoring ASCII case;
/// `choice` requires an exact, case-sensitive match.
pub fn validate_answer(record: &QuestionRecord, answer: &str) -> Result<(), AnswerRejection> {
    if record.required && answer.is_empty() {
        return Err(AnswerRejection::Required);
    }
    match record.question_type {
        QuestionType::Text => Ok(()),
        QuestionType::Number => {
            if answer.parse::<f64>().is_ok() {
                Ok(())
            } else {
                Err(AnswerRejection::NotNumber)
            }
        }
        QuestionType::Boolean => {
            if answer.eq_ignore_ascii_case("true") || answer.eq_ignore_ascii_case("false") {
                Ok(())
            } else {
                Err(AnswerRejection::NotBoolean)
            }
        }
        QuestionType::Choice => {
            if record.choices.iter().any(|choice| choice == answer) {
                Ok(())
            } else {
                Err(AnswerRejection::NotAChoice {
                    choices: record.choices.join(", "),
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "answer_tests.rs"]
mod tests;
