//! CSV encoding and all-or-nothing output
//!
//! The whole table is rendered into memory before anything touches the
//! destination, so a failed conversion never leaves a partial file behind.

use crate::error::{ConversionError, ConversionResult};
use crate::formatter::CsvTable;
use std::path::Path;

/// Render a table as a UTF-8 CSV string with standard quoting.
///
/// Fields containing the delimiter, a quote, or a newline are quoted with
/// embedded quotes doubled (the `csv` crate default).
pub fn encode(table: &CsvTable) -> ConversionResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for row in table.all_rows() {
        writer
            .write_record(row)
            .map_err(|e| ConversionError::io(format!("CSV encoding failed: {}", e), None))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ConversionError::io(format!("CSV encoding failed: {}", e), None))?;

    String::from_utf8(bytes)
        .map_err(|e| ConversionError::io(format!("CSV output was not UTF-8: {}", e), None))
}

/// Write rendered CSV to a file, refusing to overwrite unless forced
pub fn write_to_path(content: &str, path: &Path, force: bool) -> ConversionResult<()> {
    if path.exists() && !force {
        return Err(ConversionError::io(
            "output file already exists (use --force to overwrite)".to_string(),
            Some(path.to_path_buf()),
        ));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConversionError::io(e.to_string(), Some(parent.to_path_buf())))?;
        }
    }

    std::fs::write(path, content)
        .map_err(|e| ConversionError::io(e.to_string(), Some(path.to_path_buf())))
}
