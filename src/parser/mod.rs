//! JSON parsing and input-source handling

pub mod directory;
pub mod validation;

use crate::error::{ParseError, ParseResult};
use std::io::Read;
use std::path::PathBuf;

/// Source of the JSON document to convert
#[derive(Debug, Clone)]
pub enum JsonSource {
    /// Raw JSON string input
    String(String),
    /// Single JSON file path
    File(PathBuf),
    /// Directory containing multiple JSON files (batch conversion only)
    Directory(PathBuf),
    /// Standard input stream
    Stdin,
}

impl JsonSource {
    /// Parse JSON from this source
    pub fn parse(&self) -> ParseResult<serde_json::Value> {
        match self {
            JsonSource::String(content) => parse_from_string(content),
            JsonSource::File(path) => parse_from_file(path),
            JsonSource::Stdin => parse_from_stdin(),
            JsonSource::Directory(_) => Err(ParseError::new(
                "Cannot parse directory as single JSON value".to_string(),
                None,
            )),
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            JsonSource::String(_) => "string input".to_string(),
            JsonSource::File(path) => format!("file: {}", path.display()),
            JsonSource::Directory(path) => format!("directory: {}", path.display()),
            JsonSource::Stdin => "standard input".to_string(),
        }
    }

    /// Check if the source exists and is accessible
    pub fn exists(&self) -> bool {
        match self {
            JsonSource::String(_) => true,
            JsonSource::File(path) => path.exists() && path.is_file(),
            JsonSource::Directory(path) => path.exists() && path.is_dir(),
            JsonSource::Stdin => true,
        }
    }
}

/// Parse JSON from a string
fn parse_from_string(content: &str) -> ParseResult<serde_json::Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new("Empty JSON input".to_string(), None));
    }

    serde_json::from_str(trimmed).map_err(|e| {
        let location = error_location(&e);
        ParseError::new(format!("Invalid JSON: {}", e), location)
            .with_preview(error_preview(trimmed, location))
    })
}

/// Parse JSON from a file
fn parse_from_file(path: &PathBuf) -> ParseResult<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ParseError::new(format!("Failed to read file: {}", e), None))?;

    parse_from_string(&content)
}

/// Parse JSON from standard input
fn parse_from_stdin() -> ParseResult<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ParseError::new(format!("Failed to read stdin: {}", e), None))?;

    parse_from_string(buffer.trim())
}

/// Extract the (line, column) location from a serde_json error
fn error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    // serde_json reports (0, 0) when the location is unknown
    if error.line() == 0 {
        None
    } else {
        Some((error.line(), error.column()))
    }
}

/// Render the offending line with a caret under the error column
fn error_preview(content: &str, location: Option<(usize, usize)>) -> String {
    let Some((line, col)) = location else {
        return "Context not available".to_string();
    };

    match content.lines().nth(line.saturating_sub(1)) {
        Some(error_line) => {
            let caret_offset = col.saturating_sub(1).min(error_line.len());
            format!("{}\n{}^", error_line, " ".repeat(caret_offset))
        }
        None => "Context not available".to_string(),
    }
}
