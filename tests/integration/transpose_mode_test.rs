//! Integration tests for transpose-mode conversion

use csvconv::{
    convert_json, convert_json_to_csv, ConversionConfig, ConversionError, Mode, ModeSelection,
    StructureError,
};
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_parallel_arrays_become_hierarchical_headers() {
    let json = json!([{"k": "v", "data": {"m": ["a", "b"], "n": [1, 2]}}]);
    let csv = convert_json(&json).unwrap();
    assert_eq!(csv, "k,data,data\n,m,n\nv,a,1\n,b,2\n");
}

#[test]
fn test_auto_detection_picks_transpose() {
    let json = json!([{"k": "v", "data": {"m": ["a"], "n": [1]}}]);
    let result = convert_json_to_csv(&json, &ConversionConfig::default()).unwrap();
    assert_eq!(result.metadata.mode, Mode::Transpose);
}

#[test]
fn test_data_row_count_equals_array_length() {
    let json = json!([{"id": 7, "g": {"a": [1, 2, 3, 4], "b": [5, 6, 7, 8]}}]);
    let result = convert_json_to_csv(&json, &ConversionConfig::default()).unwrap();
    assert_eq!(result.metadata.row_count, 4);
}

#[test]
fn test_scalars_appear_only_on_first_row() {
    let json = json!([{"id": 7, "g": {"a": [1, 2], "b": [3, 4]}}]);
    let csv = convert_json(&json).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[2], "7,1,3");
    assert_eq!(lines[3], ",2,4");
}

#[test]
fn test_length_mismatch_raises_structure_error() {
    let json = json!([{"g": {"a": [1, 2], "b": [1, 2, 3]}}]);
    let result =
        convert_json_to_csv(&json, &ConversionConfig::with_mode(ModeSelection::Transpose));
    let error = result.unwrap_err();
    assert_matches!(
        error,
        ConversionError::Structure(StructureError::GroupLengthMismatch { .. })
    );
    let message = error.user_message();
    assert!(message.contains("'g'"));
    assert!(message.contains('2'));
    assert!(message.contains('3'));
}

#[test]
fn test_forced_transpose_mismatched_lengths() {
    let json = json!([{"g": {"x": [1, 2], "y": [1]}}]);
    let result =
        convert_json_to_csv(&json, &ConversionConfig::with_mode(ModeSelection::Transpose));
    assert_matches!(
        result,
        Err(ConversionError::Structure(
            StructureError::GroupLengthMismatch {
                expected: 2,
                found: 1,
                ..
            }
        ))
    );
}

#[test]
fn test_forced_transpose_without_group_fails() {
    let json = json!([{"id": 1, "name": "A"}]);
    let result =
        convert_json_to_csv(&json, &ConversionConfig::with_mode(ModeSelection::Transpose));
    assert_matches!(
        result,
        Err(ConversionError::Structure(StructureError::NoTransposeGroup))
    );
}

#[test]
fn test_mixed_records_emit_single_rows_without_groups() {
    let json = json!([
        {"k": "v", "data": {"m": ["a", "b"], "n": [1, 2]}},
        {"k": "w"}
    ]);
    let csv = convert_json(&json).unwrap();
    assert_eq!(csv, "k,data,data\n,m,n\nv,a,1\n,b,2\nw,,\n");
}

#[test]
fn test_multiple_groups_in_one_record() {
    let json = json!([{
        "id": 1,
        "a": {"x": [1], "y": [2]},
        "b": {"p": [3], "q": [4]}
    }]);
    let csv = convert_json(&json).unwrap();
    assert_eq!(csv, "id,a,a,b,b\n,x,y,p,q\n1,1,2,3,4\n");
}

#[test]
fn test_auto_detection_skips_unequal_candidate() {
    // Unequal sibling lengths disqualify auto transpose; nesting wins instead
    let json = json!([{"g": {"x": [1, 2], "y": [1]}}]);
    let result = convert_json_to_csv(&json, &ConversionConfig::default()).unwrap();
    assert_eq!(result.metadata.mode, Mode::Flatten);
}
