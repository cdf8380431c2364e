//! Test-only builders for candidate values.

use serde_json::Value as JsonValue;

use crate::core::value::{Handler, Instance, Map, Value};

/// Convert a JSON literal into a candidate value.
pub fn action(json: JsonValue) -> Value {
    Value::from(json)
}

/// Build a plain record from key/value pairs.
pub fn record<const N: usize>(entries: [(&str, Value); N]) -> Map {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Handler that returns the state unchanged.
pub fn handler() -> Handler {
    Handler::new(|state, _action| state.clone())
}

/// Build a non-plain record as produced by the constructor named `class`.
pub fn instance(class: &str, fields: Map) -> Value {
    Value::Instance(Instance {
        class: class.to_string(),
        fields,
    })
}
