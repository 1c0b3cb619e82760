//! Deep pruning of absent values.
//!
//! Generators assemble their output with `serde_json::json!`, letting every
//! absent optional land as `null`. [`compact`] then strips those keys in a
//! single pass, so the "absent means no key" rule lives in one place.

use serde_json::Value;

/// Removes every null-valued object key, recursing through nested objects
/// and through objects held in arrays. Array elements are never removed.
pub fn compact(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, entry| !entry.is_null());
            map.values_mut().for_each(compact);
        }
        Value::Array(items) => items.iter_mut().for_each(compact),
        _ => {}
    }
}

/// Owned form of [`compact`].
pub fn compacted(mut value: Value) -> Value {
    compact(&mut value);
    value
}

/// Borrows a string only when it carries text: `None` and `""` are both absent.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}
