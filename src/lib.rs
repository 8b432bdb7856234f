//! JSON array to CSV converter
//!
//! Converts an array of heterogeneous JSON objects into a CSV table,
//! auto-detecting which of three output shapes fits the data: plain
//! (one column per key), flatten (nested values expand into dotted/indexed
//! path columns), or transpose (parallel-array groups become hierarchical
//! headers with one row per array index).

pub mod cli;
pub mod conversion;
pub mod error;
pub mod flatten;
pub mod formatter;
pub mod parser;
pub mod writer;

// Re-export commonly used types
pub use conversion::{
    convert_json_to_csv, ConversionConfig, ConversionResult, CsvData, Mode, ModeSelection,
};
pub use error::{ConversionError, ParseError, SchemaError, StructureError};
pub use parser::JsonSource;

/// Convert a parsed JSON document to CSV with default configuration
pub fn convert_json(json: &serde_json::Value) -> Result<String, ConversionError> {
    let config = ConversionConfig::default();
    convert_json_with_config(json, &config)
}

/// Convert a parsed JSON document to CSV with custom configuration
pub fn convert_json_with_config(
    json: &serde_json::Value,
    config: &ConversionConfig,
) -> Result<String, ConversionError> {
    let result = convert_json_to_csv(json, config)?;
    Ok(result.content)
}
