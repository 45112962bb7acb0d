// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operator-facing diagnostics.
//!
//! Errors and warnings go to stderr, colored when stderr is a terminal.

use std::io::{self, IsTerminal, Write};

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Print a fatal error to stderr.
pub fn print_error(message: impl std::fmt::Display) {
    let use_color = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), "Error", RED, message, use_color);
}

/// Print a non-fatal warning to stderr.
pub fn print_warning(message: impl std::fmt::Display) {
    let use_color = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), "Warning", YELLOW, message, use_color);
}

fn write_diagnostic<W: Write>(
    writer: &mut W,
    label: &str,
    color: &str,
    message: impl std::fmt::Display,
    use_color: bool,
) {
    if use_color {
        let _ = writeln!(writer, "{color}{label}: {message}{RESET}");
    } else {
        let _ = writeln!(writer, "{label}: {message}");
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
