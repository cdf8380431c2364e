//! Untyped candidate values handed to the validators.
//!
//! Callers may pass anything at the validation boundary, so the validators work on a
//! variant type rather than typed structs. JSON documents convert into it losslessly;
//! [`Value::Instance`] and [`Value::Function`] only come from in-process callers.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// String-keyed record.
pub type Map = BTreeMap<String, Value>;

/// Generic candidate value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<Value>),
    /// Plain key-value record.
    Object(Map),
    /// Record produced by a named constructor. Never a plain object.
    Instance(Instance),
    /// Callable reducer handler.
    Function(Handler),
}

/// Record with a non-plain prototype, identified by its constructor name.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub class: String,
    pub fields: Map,
}

type HandlerFn = dyn Fn(&Value, &Value) -> Value + Send + Sync;

/// Reducer handler: `(state, action) -> next state`.
///
/// Equality is identity of the underlying closure.
#[derive(Clone)]
pub struct Handler(Arc<HandlerFn>);

impl Handler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &Value) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, state: &Value, action: &Value) -> Value {
        (self.0)(state, action)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Value {
    /// True only for ordinary records: not null, not an array, not an instance.
    pub fn is_plain_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Values of `self` viewed as a key-value structure.
    ///
    /// Records yield their field values, arrays their items, anything else nothing.
    pub fn entries(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match self {
            Value::Object(map) => Box::new(map.values()),
            Value::Instance(instance) => Box::new(instance.fields.values()),
            Value::Array(items) => Box::new(items.iter()),
            _ => Box::new(std::iter::empty()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Handler> for Value {
    fn from(handler: Handler) -> Self {
        Value::Function(handler)
    }
}
