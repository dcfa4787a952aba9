//! Response envelope normalization.
//!
//! The backend is inconsistent about how it wraps lists: some endpoints return a bare
//! array, others `{data: [...]}`, `{value: [...]}`, or an object whose first array
//! field holds the records. Every list call goes through [`normalize`] so views only
//! ever see an ordered sequence of records.

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Extract the record list from any response shape, never failing
///
/// First match wins:
/// 1. a bare array is returned as is,
/// 2. an object's `data` field, if it is an array,
/// 3. an object's `value` field, if it is an array,
/// 4. the first array-valued field of an object, in document order,
/// 5. otherwise an empty list.
pub fn normalize(raw: Value) -> Vec<Value> {
    match raw {
        Value::Array(records) => records,
        Value::Object(mut map) => {
            for key in ["data", "value"] {
                if matches!(map.get(key), Some(Value::Array(_))) {
                    if let Some(Value::Array(records)) = map.remove(key) {
                        return records;
                    }
                }
            }

            map.into_iter()
                .find_map(|(_, value)| match value {
                    Value::Array(records) => Some(records),
                    _ => None,
                })
                .unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

/// Normalize then decode each record, skipping the ones that do not decode
pub fn normalize_as<T: DeserializeOwned>(raw: Value) -> Vec<T> {
    normalize(raw)
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(index = index, "Skipping record that failed to decode: {}", err);
                None
            }
        })
        .collect()
}
