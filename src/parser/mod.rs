//! PRD loading and parsing module

use crate::error::{ConversionError, ConversionResult, ParseError, ParseResult};
use crate::model::Prd;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source for PRD parsing operations
#[derive(Debug, Clone, PartialEq)]
pub enum PrdSource {
    /// PRD JSON held in memory
    String(String),
    /// PRD JSON file on disk
    File(PathBuf),
}

impl PrdSource {
    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            PrdSource::String(_) => "string input".to_string(),
            PrdSource::File(path) => format!("file: {}", path.display()),
        }
    }

    /// Read and parse the PRD from this source
    pub fn load(&self) -> ConversionResult<Prd> {
        match self {
            PrdSource::String(content) => Ok(parse_prd(content)?),
            PrdSource::File(path) => {
                let content = read_source_file(path)?;
                Ok(parse_prd(&content)?)
            }
        }
    }
}

/// Read the PRD file, separating "missing" from "unreadable"
fn read_source_file(path: &Path) -> ConversionResult<String> {
    if !path.exists() {
        return Err(ConversionError::input_not_found(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConversionError::io(
            format!("Failed to read PRD file: {}", e),
            Some(path.to_path_buf()),
        )
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read PRD file");
    Ok(content)
}

/// Parse a PRD document from a JSON string
pub fn parse_prd(content: &str) -> ParseResult<Prd> {
    if content.trim().is_empty() {
        return Err(ParseError::new("Empty PRD document".to_string(), None));
    }

    serde_json::from_str(content).map_err(|e| {
        let location = error_location(&e);
        let error = ParseError::new(format!("Invalid PRD: {}", strip_location(&e)), location);
        match location.and_then(|(line, _)| error_preview(content, line)) {
            Some(preview) => error.with_preview(preview),
            None => error,
        }
    })
}

/// Line and column reported by serde_json, if it has one
fn error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    if error.line() == 0 {
        None
    } else {
        Some((error.line(), error.column()))
    }
}

/// serde_json appends " at line X column Y" to its messages; we report
/// the location separately
fn strip_location(error: &serde_json::Error) -> String {
    let message = error.to_string();
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message,
    }
}

/// The offending line, trimmed, for display under the error
fn error_preview(content: &str, line: usize) -> Option<String> {
    let text = content.lines().nth(line.checked_sub(1)?)?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
