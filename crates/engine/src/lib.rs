// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Form schema validation and interactive answer collection.
//!
//! This crate is the core of `formfill`: it checks raw question records
//! against the schema contract, decides whether individual answers are
//! acceptable, and drives the blocking prompt/validate/retry loop over
//! injected input and output handles. It performs no file or terminal
//! access of its own, so every piece is testable with scripted input.

pub mod answer;
pub mod schema;
pub mod session;
pub mod validate;

pub use answer::{validate_answer, AnswerRejection};
pub use schema::{decode_records, AnswerMapping, QuestionRecord, QuestionType};
pub use session::{Session, SessionError};
pub use validate::{validate, ValidationErrorReport};
