// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Question schema file loading.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while locating or decoding a schema file. All fatal to
/// the run; none of them is reachable once collection has started.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no such file: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid file format. Only JSON or YAML files are supported.")]
    UnsupportedFormat,

    #[error("failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("the schema file must contain a top-level list of questions")]
    NotASequence,
}

/// Supported schema file formats, detected from the extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Detect the format from the file extension, ASCII-case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(SourceFormat::Json),
            Some("yaml" | "yml") => Ok(SourceFormat::Yaml),
            _ => Err(SourceError::UnsupportedFormat),
        }
    }
}

/// Load the raw question records from a schema file.
///
/// The format is decided before the file is read, so an unsupported
/// extension fails without touching the content. The decoded top-level
/// value must be a sequence; the records inside it are left raw for the
/// schema validator.
pub fn load_records(path: &Path) -> Result<Vec<Value>, SourceError> {
    let format = SourceFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let decoded: Value = match format {
        SourceFormat::Json => serde_json::from_str(&content)?,
        SourceFormat::Yaml => serde_yaml::from_str(&content)?,
    };
    match decoded {
        Value::Array(records) => Ok(records),
        _ => Err(SourceError::NotASequence),
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
