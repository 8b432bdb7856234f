//! Transpose building: parallel-array groups become hierarchical headers
//!
//! A record field like `"data": {"m": ["a", "b"], "n": [1, 2]}` is a group
//! of parallel arrays. It contributes two `data` columns with secondary
//! labels `m` and `n`, and each array index becomes its own data row:
//!
//! ```text
//! k,data,data
//! ,m,n
//! v,a,1
//! ,b,2
//! ```

use crate::error::{ConversionResult, StructureError};
use crate::formatter::headers::HeaderSet;
use crate::formatter::{value_to_cell, CsvTable};
use crate::parser::validation::Record;
use serde_json::Value;
use std::collections::HashSet;

/// One detected group of parallel arrays inside a record
#[derive(Debug)]
pub struct TransposeGroup<'a> {
    /// The record field holding the group; repeats in the primary header
    pub key: &'a str,
    /// Sibling array name and contents, in document order
    pub arrays: Vec<(&'a str, &'a Vec<Value>)>,
}

impl TransposeGroup<'_> {
    /// The common sibling-array length
    pub fn len(&self) -> usize {
        self.arrays.first().map_or(0, |(_, array)| array.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn array(&self, name: &str) -> Option<&Vec<Value>> {
        self.arrays
            .iter()
            .find(|(array_name, _)| *array_name == name)
            .map(|(_, array)| *array)
    }
}

/// A field qualifies as a group candidate when its value is an object whose
/// own values are all arrays, with at least two of them. Returns the sibling
/// arrays in document order.
fn candidate(value: &Value) -> Option<Vec<(&str, &Vec<Value>)>> {
    let map = value.as_object()?;
    if map.len() < 2 {
        return None;
    }

    let mut arrays = Vec::with_capacity(map.len());
    for (name, sibling) in map {
        arrays.push((name.as_str(), sibling.as_array()?));
    }
    Some(arrays)
}

fn equal_lengths(arrays: &[(&str, &Vec<Value>)]) -> bool {
    match arrays.split_first() {
        Some((&(_, first), rest)) => rest.iter().all(|&(_, array)| array.len() == first.len()),
        None => true,
    }
}

/// True if any field is a group candidate, lengths aside.
///
/// Used when transpose is forced: a candidate with unequal lengths is a
/// detection error, not grounds to fall back to another mode.
pub fn has_candidate_group(record: &Record) -> bool {
    record.values().any(|v| candidate(v).is_some())
}

/// True if any field is a candidate whose sibling arrays have equal lengths.
/// This is the auto-detection rule.
pub fn has_qualifying_group(record: &Record) -> bool {
    record
        .values()
        .any(|v| candidate(v).is_some_and(|arrays| equal_lengths(&arrays)))
}

/// Detect every group in a record, validating sibling-array lengths.
///
/// Unequal lengths within one group are a hard error naming the group key
/// and both lengths; there is no truncation or padding inside a group.
pub fn detect_groups(record: &Record) -> Result<Vec<TransposeGroup<'_>>, StructureError> {
    let mut groups = Vec::new();

    for (key, value) in record {
        let Some(arrays) = candidate(value) else {
            continue;
        };

        if let Some((&(_, first), rest)) = arrays.split_first() {
            for &(name, array) in rest {
                if array.len() != first.len() {
                    return Err(StructureError::GroupLengthMismatch {
                        group: key.clone(),
                        array: name.to_string(),
                        expected: first.len(),
                        found: array.len(),
                    });
                }
            }
        }

        groups.push(TransposeGroup {
            key: key.as_str(),
            arrays,
        });
    }

    Ok(groups)
}

/// Column block for one group key: the key plus its secondary labels
#[derive(Debug)]
struct GroupLayout {
    key: String,
    columns: Vec<String>,
}

/// Build the two-row hierarchical header and per-index data rows
pub fn build_transpose(records: &[&Record]) -> ConversionResult<CsvTable> {
    // Detect and validate groups for every record up front; no output is
    // produced once any group fails validation
    let mut per_record_groups = Vec::with_capacity(records.len());
    for record in records {
        per_record_groups.push(detect_groups(record)?);
    }

    // Scalar columns: every non-group field, resolved across all records in
    // first-seen order
    let mut scalar_headers = HeaderSet::new();
    for (record, groups) in records.iter().zip(&per_record_groups) {
        let group_keys: HashSet<&str> = groups.iter().map(|g| g.key).collect();
        for key in record.keys() {
            if !group_keys.contains(key.as_str()) {
                scalar_headers.push(key);
            }
        }
    }

    // Group columns: the first record that carries a group key defines that
    // group's secondary labels; later groups append in first-seen order
    let mut layouts: Vec<GroupLayout> = Vec::new();
    let mut seen_groups: HashSet<String> = HashSet::new();
    for groups in &per_record_groups {
        for group in groups {
            if seen_groups.insert(group.key.to_string()) {
                layouts.push(GroupLayout {
                    key: group.key.to_string(),
                    columns: group.arrays.iter().map(|(name, _)| name.to_string()).collect(),
                });
            }
        }
    }

    let scalar_keys = scalar_headers.keys().to_vec();

    let mut primary: Vec<String> = scalar_keys.clone();
    let mut secondary: Vec<String> = vec![String::new(); scalar_keys.len()];
    for layout in &layouts {
        for column in &layout.columns {
            primary.push(layout.key.clone());
            secondary.push(column.clone());
        }
    }

    let mut rows = Vec::new();
    for (record, groups) in records.iter().zip(&per_record_groups) {
        // A record with groups emits one row per array index; shorter groups
        // in the same record pad with empty cells. A record without groups
        // emits a single row.
        let row_count = groups.iter().map(TransposeGroup::len).max().unwrap_or(1).max(1);

        for index in 0..row_count {
            let mut row = Vec::with_capacity(primary.len());

            // Scalar values appear on the record's first row only
            for key in &scalar_keys {
                if index == 0 {
                    row.push(record.get(key).map(value_to_cell).unwrap_or_default());
                } else {
                    row.push(String::new());
                }
            }

            for layout in &layouts {
                let group = groups.iter().find(|g| g.key == layout.key);
                for column in &layout.columns {
                    let cell = group
                        .and_then(|g| g.array(column))
                        .and_then(|array| array.get(index))
                        .map(value_to_cell)
                        .unwrap_or_default();
                    row.push(cell);
                }
            }

            rows.push(row);
        }
    }

    Ok(CsvTable {
        header_rows: vec![primary, secondary],
        rows,
    })
}
