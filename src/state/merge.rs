//! Deep merge for JSON response objects.
//!
//! Used to fold the computed envelope fields into what remains of a raw
//! response.
//!
//! # Merge Rules
//!
//! - Objects are merged recursively
//! - Arrays are merged index by index; extra overlay elements are appended
//! - Null values in overlay replace the base value
//! - Scalars in overlay replace whatever is in base

use serde_json::Value;

/// Deep merge two JSON values.
///
/// # Arguments
///
/// * `base` - The value being merged into
/// * `overlay` - The value merged on top (takes precedence)
///
/// # Returns
///
/// A new Value with merged contents
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                let merged = match base_map.get(key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value.clone(),
                };
                result.insert(key.clone(), merged);
            }

            Value::Object(result)
        }

        (Value::Array(base_items), Value::Array(overlay_items)) => {
            let mut result = base_items.clone();

            for (index, overlay_value) in overlay_items.iter().enumerate() {
                match result.get_mut(index) {
                    Some(slot) => *slot = deep_merge(slot, overlay_value),
                    None => result.push(overlay_value.clone()),
                }
            }

            Value::Array(result)
        }

        (_, overlay) => overlay.clone(),
    }
}
