//! Integration tests for the error taxonomy: parse, schema, structure

use csvconv::conversion::engine::ConversionEngine;
use csvconv::{ConversionConfig, ConversionError, SchemaError};
use assert_matches::assert_matches;
use serde_json::json;

fn engine() -> ConversionEngine {
    ConversionEngine::new(ConversionConfig::default())
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let result = engine().convert_string("[{\"id\": 1,}]");
    let error = result.unwrap_err();
    assert_matches!(error, ConversionError::Parse(_));
    assert!(error.user_message().contains("JSON parse error"));
}

#[test]
fn test_empty_array_is_a_schema_error() {
    let result = engine().convert(&json!([]));
    assert_matches!(
        result,
        Err(ConversionError::Schema(SchemaError::EmptyArray))
    );
}

#[test]
fn test_scalar_document_is_a_schema_error() {
    let result = engine().convert(&json!(42));
    assert_matches!(
        result,
        Err(ConversionError::Schema(SchemaError::NotAnArray { .. }))
    );
}

#[test]
fn test_array_with_non_object_is_a_schema_error() {
    let result = engine().convert(&json!([{"a": 1}, "not an object"]));
    assert_matches!(
        result,
        Err(ConversionError::Schema(SchemaError::NonObjectElement {
            index: 1,
            ..
        }))
    );
}

#[test]
fn test_schema_error_message_names_the_requirement() {
    let error = engine().convert(&json!([])).unwrap_err();
    assert!(error
        .user_message()
        .contains("input must be a non-empty array of objects"));
}

#[test]
fn test_parse_error_reports_location() {
    let result = engine().convert_string("[\n  {\"id\": }\n]");
    match result {
        Err(ConversionError::Parse(err)) => {
            let (line, _col) = err.location.expect("location should be known");
            assert_eq!(line, 2);
        }
        other => panic!("expected parse error, got {:?}", other.map(|d| d.content)),
    }
}
