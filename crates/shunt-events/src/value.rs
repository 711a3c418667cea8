//! Total field extraction over raw JSON payloads.
//!
//! Every helper in this module is infallible: a missing key, a wrong value
//! type, or a non-object parent all produce the field type's empty default.
//! This keeps every event constructor total: a malformed payload yields a
//! defaulted event, never an error.

use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// Returns the value under `key`, or `Null` if absent.
///
/// Used to descend into nested substructures (`s3.bucket`, `kinesis`, `Sns`)
/// without threading `Option` through every field extraction.
pub(crate) fn child_at<'a>(value: &'a Value, key: &str) -> &'a Value {
    value.get(key).unwrap_or(&NULL)
}

/// String field, defaulting to `""`.
pub(crate) fn string_at(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Signed integer field, defaulting to `0`.
pub(crate) fn i64_at(value: &Value, key: &str) -> i64 {
    value.get(key).and_then(Value::as_i64).unwrap_or_default()
}

/// Unsigned integer field, defaulting to `0`.
pub(crate) fn u64_at(value: &Value, key: &str) -> u64 {
    value.get(key).and_then(Value::as_u64).unwrap_or_default()
}

/// Floating-point field, defaulting to `0.0`. Integer values are widened.
pub(crate) fn f64_at(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or_default()
}

/// Boolean field, defaulting to `false`.
pub(crate) fn bool_at(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or_default()
}

/// Object field cloned into an owned map, defaulting to an empty map.
pub(crate) fn map_at(value: &Value, key: &str) -> Map<String, Value> {
    value
        .get(key)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Field preserved verbatim as a generic value, defaulting to `{}`.
///
/// For substructures that have no fixed schema (EventBridge `detail`,
/// DynamoDB change images, message attributes).
pub(crate) fn value_at(value: &Value, key: &str) -> Value {
    value
        .get(key)
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}

/// Sequence field as a borrowed slice, defaulting to empty.
pub(crate) fn seq_at<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// String field carried as opaque bytes, defaulting to empty.
///
/// No decoding is performed: a base64-encoded record body arrives exactly as
/// it sits on the wire, and decoding it is the caller's concern.
pub(crate) fn bytes_at(value: &Value, key: &str) -> Vec<u8> {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .as_bytes()
        .to_vec()
}

/// Sequence of strings, dropping non-string entries, defaulting to empty.
pub(crate) fn strings_at(value: &Value, key: &str) -> Vec<String> {
    seq_at(value, key)
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect()
}
