// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end run flow: load, validate, collect, report.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use formfill_engine::{decode_records, Session, SessionError, ValidationErrorReport};
use thiserror::Error;

use crate::cli::Cli;
use crate::output;
use crate::report;
use crate::source::{self, SourceError};

/// Fatal failures for the whole run. Answer rejections never surface
/// here; the session handles them by re-prompting.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Source(#[from] SourceError),

    /// At least one record violated the schema contract. The full report
    /// is shown before any prompting would have started.
    #[error("invalid question schema\n{0}")]
    Schema(ValidationErrorReport),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("input closed while waiting for a file path")]
    PathPromptClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Run the binary's whole flow against real stdin/stdout.
pub fn run(cli: &Cli) -> Result<(), RunError> {
    let path = resolve_path(cli)?;
    let records = source::load_records(&path)?;

    let report = formfill_engine::validate(&records);
    if !report.is_empty() {
        return Err(RunError::Schema(report));
    }
    let questions = decode_records(records).map_err(SourceError::from)?;

    let stdin = io::stdin();
    let answers = Session::new(&questions, stdin.lock(), io::stdout()).run()?;
    report::print_summary(&questions, &answers, io::stdout())?;
    Ok(())
}

/// A path argument must exist as given; without one, prompt until the
/// operator names an existing file.
fn resolve_path(cli: &Cli) -> Result<PathBuf, RunError> {
    match &cli.file {
        Some(path) if path.exists() => Ok(path.clone()),
        Some(path) => Err(SourceError::NotFound(path.clone()).into()),
        None => prompt_for_path(),
    }
}

fn prompt_for_path() -> Result<PathBuf, RunError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("Enter file path: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(RunError::PathPromptClosed);
        }
        let path = PathBuf::from(line.trim_end_matches(['\r', '\n']));
        if path.exists() {
            return Ok(path);
        }
        output::print_warning(format_args!("no such file: {}", path.display()));
    }
}
