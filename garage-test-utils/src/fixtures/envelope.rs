//! The four list envelope shapes seen across the backend's endpoints.

use serde_json::{json, Value};

/// Records with sequential ids starting at 1
pub fn records(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|id| json!({ "id": id, "nom": format!("Enregistrement {}", id) }))
        .collect()
}

pub fn bare(records: Vec<Value>) -> Value {
    Value::Array(records)
}

pub fn data(records: Vec<Value>) -> Value {
    json!({ "success": true, "data": records })
}

pub fn value(records: Vec<Value>) -> Value {
    json!({ "success": true, "value": records })
}

/// Records under an arbitrary resource-named key, e.g. `{"clients": [...]}`
pub fn named(key: &str, records: Vec<Value>) -> Value {
    let mut body = serde_json::Map::new();
    body.insert("success".to_string(), Value::Bool(true));
    body.insert(key.to_string(), Value::Array(records));

    Value::Object(body)
}

/// Every envelope shape wrapping the same records
pub fn all_shapes(records: Vec<Value>) -> Vec<Value> {
    vec![
        bare(records.clone()),
        data(records.clone()),
        value(records.clone()),
        named("items", records),
    ]
}
