//! Reducer definition shape.
//!
//! Only guards against a flat action map passed where a domain map belongs. Domain map
//! values and leaf handlers are not inspected.

use crate::core::value::Value;
use crate::error::ValidationError;

/// Validate that `candidate` does not look like a bare action map.
///
/// An empty definition is accepted.
pub fn validate_reducer(candidate: &Value) -> Result<(), ValidationError> {
    if is_action_map(candidate) {
        return Err(ValidationError::WrongShape);
    }
    Ok(())
}

/// True if `map` has at least one entry and every entry is callable.
fn is_action_map(map: &Value) -> bool {
    let mut entries = map.entries().peekable();
    entries.peek().is_some() && entries.all(Value::is_callable)
}
