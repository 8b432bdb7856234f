//! Integration tests for flatten-mode conversion

use csvconv::{
    convert_json, convert_json_to_csv, ConversionConfig, ConversionError, Mode, ModeSelection,
    StructureError,
};
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_array_fields_expand_into_indexed_columns() {
    let json = json!([{"id": 1, "tags": ["x", "y"]}]);
    let csv = convert_json(&json).unwrap();
    assert_eq!(csv, "id,tags[0],tags[1]\n1,x,y\n");
}

#[test]
fn test_nested_objects_expand_into_dotted_columns() {
    let json = json!([{"name": "A", "address": {"city": "Oslo", "zip": "0150"}}]);
    let csv = convert_json(&json).unwrap();
    assert_eq!(csv, "name,address.city,address.zip\nA,Oslo,0150\n");
}

#[test]
fn test_auto_detection_picks_flatten_for_nested_input() {
    let json = json!([{"id": 1}, {"id": 2, "extra": {"a": 1}}]);
    let result = convert_json_to_csv(&json, &ConversionConfig::default()).unwrap();
    assert_eq!(result.metadata.mode, Mode::Flatten);
}

#[test]
fn test_records_with_different_nesting_depths() {
    let json = json!([
        {"id": 1, "tags": ["x"]},
        {"id": 2, "tags": ["a", "b"]}
    ]);
    let csv = convert_json(&json).unwrap();
    assert_eq!(csv, "id,tags[0],tags[1]\n1,x,\n2,a,b\n");
}

#[test]
fn test_empty_containers_produce_no_columns() {
    let json = json!([{"id": 1, "empty_obj": {}, "empty_arr": []}]);
    let result =
        convert_json_to_csv(&json, &ConversionConfig::with_mode(ModeSelection::Flatten)).unwrap();
    assert_eq!(result.content, "id\n1\n");
}

#[test]
fn test_flattened_paths_never_collide() {
    let json = json!([{
        "a": {"b": [1, 2]},
        "c": [{"d": 3}],
        "e": {"f": {"g": 4}}
    }]);
    let csv = convert_json(&json).unwrap();
    let header: Vec<&str> = csv.lines().next().unwrap().split(',').collect();
    let mut unique = header.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), header.len());
}

#[test]
fn test_forced_flatten_on_flat_data_fails() {
    let json = json!([{"id": 1}, {"id": 2}]);
    let result = convert_json_to_csv(&json, &ConversionConfig::with_mode(ModeSelection::Flatten));
    assert_matches!(
        result,
        Err(ConversionError::Structure(StructureError::NothingToFlatten))
    );
}

#[test]
fn test_forced_flatten_overrides_transpose_detection() {
    let json = json!([{"k": "v", "data": {"m": ["a"], "n": [1]}}]);
    let result =
        convert_json_to_csv(&json, &ConversionConfig::with_mode(ModeSelection::Flatten)).unwrap();
    assert_eq!(result.metadata.mode, Mode::Flatten);
    assert_eq!(result.content, "k,data.m[0],data.n[0]\nv,a,1\n");
}

#[test]
fn test_deeply_nested_structure() {
    let json = json!([{"a": {"b": {"c": {"d": [{"e": "deep"}]}}}}]);
    let csv = convert_json(&json).unwrap();
    assert_eq!(csv, "a.b.c.d[0].e\ndeep\n");
}
