// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Interactive form filler
#[derive(Parser, Debug, Clone)]
#[command(
    name = "formfill",
    version,
    about = "Collect answers for a JSON/YAML question schema"
)]
pub struct Cli {
    /// Path to the question schema file (prompted for when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
