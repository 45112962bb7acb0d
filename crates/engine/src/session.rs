// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The blocking prompt/validate/retry loop.

use crate::answer::validate_answer;
use crate::schema::{AnswerMapping, QuestionRecord, QuestionType};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Fatal session failures.
///
/// Distinct from [`crate::AnswerRejection`]: a rejection re-prompts the
/// same question, these end the run.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The input handle reached end-of-file before every question had an
    /// accepted answer.
    #[error("answer input closed before every question was answered")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Interactive collection over injected input and output handles.
///
/// Walks the questions in order; each one blocks on a line of input and
/// re-prompts until the answer is accepted. There is no retry limit and
/// no timeout. Injecting the handles keeps the loop testable with a
/// scripted byte slice and a buffer sink.
pub struct Session<'q, R, W> {
    questions: &'q [QuestionRecord],
    input: R,
    output: W,
}

impl<'q, R: BufRead, W: Write> Session<'q, R, W> {
    pub fn new(questions: &'q [QuestionRecord], input: R, output: W) -> Self {
        Self {
            questions,
            input,
            output,
        }
    }

    /// Run the session to completion.
    ///
    /// Returns the mapping with exactly one accepted answer per question,
    /// inserted in question order.
    pub fn run(mut self) -> Result<AnswerMapping, SessionError> {
        let mut answers = AnswerMapping::new();
        writeln!(self.output, "All questions marked with * are required")?;
        for (index, question) in self.questions.iter().enumerate() {
            self.show_question(question)?;
            let answer = self.collect_answer(question)?;
            answers.insert(index, answer);
        }
        Ok(answers)
    }

    /// Print the prompt text, declared type, and choice list before
    /// requesting input.
    fn show_question(&mut self, question: &QuestionRecord) -> Result<(), SessionError> {
        let marker = if question.required { "*" } else { "" };
        writeln!(self.output, "Question: {}{}", marker, question.question)?;
        writeln!(self.output, "Type: {}", question.question_type)?;
        if question.question_type == QuestionType::Choice {
            writeln!(self.output, "Available choices:")?;
            for choice in &question.choices {
                writeln!(self.output, "- {}", choice)?;
            }
        }
        Ok(())
    }

    /// Prompt until the answer validates. Unbounded.
    fn collect_answer(&mut self, question: &QuestionRecord) -> Result<String, SessionError> {
        loop {
            write!(self.output, "Your answer: ")?;
            self.output.flush()?;
            let answer = self.read_line()?;
            match validate_answer(question, &answer) {
                Ok(()) => return Ok(answer),
                Err(rejection) => {
                    writeln!(self.output, "Error: {}", rejection)?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    /// Read one line, stripping the terminator and nothing else.
    fn read_line(&mut self) -> Result<String, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
