//! Table shaping: headers and rows for each conversion mode
//!
//! The formatter turns validated records into a [`CsvTable`] - one or two
//! header rows plus data rows, all of equal width. Encoding the table to CSV
//! bytes is the writer's job.

pub mod headers;
pub mod transpose;

use crate::conversion::mode::Mode;
use crate::error::ConversionResult;
use crate::flatten::flatten_record;
use crate::formatter::headers::HeaderSet;
use crate::parser::validation::Record;
use serde_json::Value;

/// The shaped output of a conversion: header row(s) plus data rows.
///
/// Every row has the same width as the header rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    pub header_rows: Vec<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Number of columns
    pub fn width(&self) -> usize {
        self.header_rows.first().map_or(0, Vec::len)
    }

    /// Number of data rows (headers excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All rows in output order, headers first
    pub fn all_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        self.header_rows.iter().chain(self.rows.iter())
    }
}

/// Build the output table for the given mode
pub fn build_table(records: &[&Record], mode: Mode) -> ConversionResult<CsvTable> {
    match mode {
        Mode::Plain => Ok(project_rows(records.iter().map(|r| (*r).clone()))),
        Mode::Flatten => Ok(project_rows(records.iter().map(|r| flatten_record(r)))),
        Mode::Transpose => transpose::build_transpose(records),
    }
}

/// Resolve headers over the (possibly flattened) records and align each
/// record to them, filling absent keys with empty cells
fn project_rows<I>(records: I) -> CsvTable
where
    I: Iterator<Item = Record>,
{
    let records: Vec<Record> = records.collect();
    let headers = HeaderSet::resolve(records.iter());

    let rows = records
        .iter()
        .map(|record| project_row(&headers, record))
        .collect();

    CsvTable {
        header_rows: vec![headers.into_keys()],
        rows,
    }
}

/// One record's cells, aligned 1:1 with the resolved headers
fn project_row(headers: &HeaderSet, record: &Record) -> Vec<String> {
    headers
        .keys()
        .iter()
        .map(|key| record.get(key).map(value_to_cell).unwrap_or_default())
        .collect()
}

/// Render one JSON value as a CSV cell.
///
/// Null becomes an empty string; strings pass through unchanged; numbers and
/// booleans use their canonical textual form. A container that survived into
/// a cell (mixed-record tolerance in plain mode) is rendered as compact JSON.
pub fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        container => container.to_string(),
    }
}
