//! Structure classification: which output shape fits the input array
//!
//! Classification runs once per conversion, before any rows are built, and
//! the chosen mode is threaded through the rest of the pipeline.

use crate::error::{ConversionResult, StructureError};
use crate::formatter::transpose;
use crate::parser::validation::Record;
use serde_json::Value;

/// The output shape chosen for a conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One column per top-level key, values written as-is
    Plain,
    /// Nested objects and arrays expand into dotted/indexed path columns
    Flatten,
    /// Parallel-array groups become hierarchical headers plus one row per index
    Transpose,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Plain => "plain",
            Mode::Flatten => "flatten",
            Mode::Transpose => "transpose",
        }
    }
}

/// Caller-facing mode selector; `Auto` defers to [`classify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSelection {
    #[default]
    Auto,
    Flatten,
    Transpose,
}

/// Decide the conversion mode for a validated record array.
///
/// The first record that triggers a rule wins; mixed records are tolerated
/// and later stages fill per-record gaps with empty cells.
pub fn classify(records: &[&Record]) -> Mode {
    if records.iter().any(|r| transpose::has_qualifying_group(r)) {
        return Mode::Transpose;
    }

    if records.iter().any(|r| has_nested_field(r)) {
        return Mode::Flatten;
    }

    Mode::Plain
}

/// Resolve a mode selection against the data.
///
/// `Auto` classifies; an explicit selection skips classification but must be
/// structurally supported, otherwise the conversion fails instead of
/// degrading silently.
pub fn resolve(selection: ModeSelection, records: &[&Record]) -> ConversionResult<Mode> {
    match selection {
        ModeSelection::Auto => Ok(classify(records)),
        ModeSelection::Flatten => {
            if records.iter().any(|r| has_nested_field(r)) {
                Ok(Mode::Flatten)
            } else {
                Err(StructureError::NothingToFlatten.into())
            }
        }
        ModeSelection::Transpose => {
            if records.iter().any(|r| transpose::has_candidate_group(r)) {
                Ok(Mode::Transpose)
            } else {
                Err(StructureError::NoTransposeGroup.into())
            }
        }
    }
}

/// True if any top-level field holds an object or an array
fn has_nested_field(record: &Record) -> bool {
    record
        .values()
        .any(|v| matches!(v, Value::Object(_) | Value::Array(_)))
}
