//! Input shape validation: the document must be a non-empty array of objects

use crate::error::SchemaError;
use serde_json::{Map, Value};

/// One JSON object from the top-level input array.
///
/// `serde_json` is built with `preserve_order`, so the map iterates in
/// document key order.
pub type Record = Map<String, Value>;

/// Validate the parsed document and extract its records.
///
/// The conversion pipeline only accepts a non-empty array whose elements are
/// all objects; anything else is a [`SchemaError`].
pub fn records(value: &Value) -> Result<Vec<&Record>, SchemaError> {
    let array = match value {
        Value::Array(array) => array,
        other => {
            return Err(SchemaError::NotAnArray {
                found: type_name(other),
            })
        }
    };

    if array.is_empty() {
        return Err(SchemaError::EmptyArray);
    }

    array
        .iter()
        .enumerate()
        .map(|(index, element)| {
            element.as_object().ok_or(SchemaError::NonObjectElement {
                index,
                found: type_name(element),
            })
        })
        .collect()
}

/// Human-readable JSON type name for error messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
