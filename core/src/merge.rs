//! Recursive merging of JSON option documents.
//!
//! Later sources win. Objects present on both sides are merged key by key;
//! arrays and scalars from a source replace whatever the target held.

use serde_json::Value;

/// Returns true only for plain key/value mappings.
///
/// Arrays, strings, numbers, booleans and `null` are not objects.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Merges every source into `target`, left to right, and returns the result.
///
/// ```
/// use clickup_core::merge::deep_merge;
/// use serde_json::json;
///
/// let merged = deep_merge(
///     json!({"headers": {"content-type": "application/json"}}),
///     &[json!({"headers": {"x-trace": "1"}})],
/// );
/// assert_eq!(merged["headers"]["content-type"], "application/json");
/// assert_eq!(merged["headers"]["x-trace"], "1");
/// ```
pub fn deep_merge<'a, I>(mut target: Value, sources: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    for source in sources {
        merge_into(&mut target, source);
    }
    target
}

/// Merges a single `source` into `target` in place.
pub fn merge_into(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, value) in source_map {
                match target_map.get_mut(key) {
                    Some(existing) if is_object(existing) && is_object(value) => {
                        merge_into(existing, value);
                    }
                    Some(existing) => *existing = value.clone(),
                    None => {
                        target_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}
