// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

//! Shared helpers for end-to-end binary tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// Create a temporary schema file with the given extension (".json",
/// ".yaml", ...).
pub fn write_schema(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// A single required text question.
pub fn name_schema() -> NamedTempFile {
    write_schema(
        r#"[{"question": "Name?", "required": true, "type": "text"}]"#,
        ".json",
    )
}
