//! Value flattening: nested JSON values become dotted/indexed path columns
//!
//! `{"address": {"city": "Oslo"}}` becomes `{"address.city": "Oslo"}` and
//! `{"skills": ["a", "b"]}` becomes `{"skills[0]": "a", "skills[1]": "b"}`.

use crate::parser::validation::Record;
use serde_json::Value;

/// Flatten one record into a mapping from field path to scalar value.
///
/// Empty objects and empty arrays produce no paths at all; the record simply
/// lacks those columns and row projection fills the gap with empty cells.
pub fn flatten_record(record: &Record) -> Record {
    let mut flat = Record::new();
    for (key, value) in record {
        flatten_into(&mut flat, key, value);
    }
    flat
}

fn flatten_into(out: &mut Record, path: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(out, &object_path(path, key), child);
            }
        }
        Value::Array(array) => {
            for (index, child) in array.iter().enumerate() {
                flatten_into(out, &index_path(path, index), child);
            }
        }
        scalar => {
            out.insert(path.to_string(), scalar.clone());
        }
    }
}

/// Child path for an object member: `parent.key`, or bare `key` at the root
fn object_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Child path for an array element: `parent[index]`
fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}
