// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Final question/answer summary rendering.

use formfill_engine::{AnswerMapping, QuestionRecord, QuestionType};
use std::io::Write;

/// Print every question with its accepted answer, in question order.
///
/// The mapping is complete by construction when the session finishes, so
/// every index resolves; a missing entry renders as an empty answer
/// rather than failing the summary.
pub fn print_summary<W: Write>(
    questions: &[QuestionRecord],
    answers: &AnswerMapping,
    mut writer: W,
) -> std::io::Result<()> {
    for (index, question) in questions.iter().enumerate() {
        writeln!(writer, "Question {}: {}", index + 1, question.question)?;
        writeln!(writer, "Type: {}", question.question_type)?;
        if question.question_type == QuestionType::Choice {
            writeln!(writer, "Available choices:")?;
            for choice in &question.choices {
                writeln!(writer, "- {}", choice)?;
            }
        }
        writeln!(writer, "Your answer: {}", answers.get(index).unwrap_or(""))?;
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
