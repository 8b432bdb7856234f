//! Core conversion engine for JSON to CSV transformation

use crate::conversion::config::ConversionConfig;
use crate::conversion::mode::{self, Mode};
use crate::error::{ConversionError, ConversionResult};
use crate::formatter::build_table;
use crate::parser::validation;
use crate::parser::JsonSource;
use crate::writer;
use serde_json::Value;
use std::time::Instant;

/// Rendered CSV output plus conversion metadata
#[derive(Debug, Clone)]
pub struct CsvData {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl CsvData {
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the rendered CSV output
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone, serde::Serialize)]
pub struct ConversionMetadata {
    /// The mode actually used (after auto-detection, if any)
    pub mode: Mode,
    /// Input records converted
    pub record_count: usize,
    /// Output columns
    pub column_count: usize,
    /// Output data rows, header rows excluded
    pub row_count: usize,
    /// First few column labels, for status reporting
    pub column_preview: Vec<String>,
    pub processing_time_ms: u64,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Convert a parsed JSON document to CSV.
    ///
    /// Fails before producing any output when the document is not a
    /// non-empty array of objects, or when the selected mode is
    /// structurally incompatible with the data.
    pub fn convert(&self, json_data: &Value) -> ConversionResult<CsvData> {
        let start_time = Instant::now();

        let records = validation::records(json_data)?;
        let mode = mode::resolve(self.config.mode, &records)?;
        let table = build_table(&records, mode)?;
        let content = writer::encode(&table)?;

        let column_preview = table
            .header_rows
            .first()
            .map(|header| header.iter().take(5).cloned().collect())
            .unwrap_or_default();

        let metadata = ConversionMetadata {
            mode,
            record_count: records.len(),
            column_count: table.width(),
            row_count: table.row_count(),
            column_preview,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        Ok(CsvData::new(content, metadata))
    }

    /// Convert JSON from a source to CSV
    pub fn convert_from_source(&self, source: &JsonSource) -> ConversionResult<CsvData> {
        let json_value = source.parse().map_err(ConversionError::Parse)?;
        self.convert(&json_value)
    }

    /// Convert a JSON string to CSV
    pub fn convert_string(&self, json_str: &str) -> ConversionResult<CsvData> {
        let source = JsonSource::String(json_str.to_string());
        self.convert_from_source(&source)
    }
}

/// Convert a parsed JSON document with the given configuration
pub fn convert_json_to_csv(
    json_data: &Value,
    config: &ConversionConfig,
) -> ConversionResult<CsvData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert(json_data)
}

/// Convert JSON from a source with the given configuration
pub fn convert_json_from_source(
    source: &JsonSource,
    config: &ConversionConfig,
) -> ConversionResult<CsvData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_from_source(source)
}

/// Convert a JSON string with the given configuration
pub fn convert_json_string(json_str: &str, config: &ConversionConfig) -> ConversionResult<CsvData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_string(json_str)
}
