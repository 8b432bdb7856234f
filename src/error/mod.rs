//! Error types and handling infrastructure for JSON to CSV conversion

use std::fmt;
use std::path::PathBuf;

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
}

impl ConversionError {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "JSON parse error at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("JSON parse error: {}", err.message)
                }
            }
            Self::Schema(err) => format!("Schema error: {}", err),
            Self::Structure(err) => format!("Structure error: {}", err),
            Self::Io { message, path } => match path {
                Some(path) => format!("IO error for {}: {}", path.display(), message),
                None => format!("IO error: {}", message),
            },
        }
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Input shape errors: the JSON parsed but is not a non-empty array of objects
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("input must be a non-empty array of objects, got {found}")]
    NotAnArray { found: &'static str },

    #[error("input must be a non-empty array of objects, got an empty array")]
    EmptyArray,

    #[error("input must be a non-empty array of objects, element {index} is {found}")]
    NonObjectElement { index: usize, found: &'static str },
}

/// Structural errors: the chosen mode is incompatible with the data
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StructureError {
    #[error(
        "group '{group}' has sibling arrays of unequal lengths ({expected} vs {found}, \
         array '{array}')"
    )]
    GroupLengthMismatch {
        group: String,
        array: String,
        expected: usize,
        found: usize,
    },

    #[error("flatten mode forced, but no record contains a nested object or array")]
    NothingToFlatten,

    #[error("transpose mode forced, but no record contains a group of parallel arrays")]
    NoTransposeGroup,
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
