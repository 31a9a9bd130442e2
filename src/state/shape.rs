//! Emptiness predicates over envelope data.
//!
//! Deriving an effective state from an envelope depends only on whether its
//! data "has content": a non-empty array, an object with at least one
//! property, or a non-empty string. Numbers, booleans and null never count.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

/// True for an array with at least one element.
pub fn is_valid_array(value: &Value) -> bool {
    value.as_array().is_some_and(|items| !items.is_empty())
}

/// True when the value has no enumerable keys.
///
/// Strings enumerate their character positions, arrays their indices and
/// objects their properties. Scalars and null have none.
pub fn is_empty_object(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Null | Value::Bool(_) | Value::Number(_) => true,
    }
}

/// True when a field is present and not `null`.
pub fn is_defined_not_null(value: Option<&Value>) -> bool {
    value.is_some_and(|v| !v.is_null())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Data types whose emptiness feeds [`get_promise_state`].
///
/// [`get_promise_state`]: super::tagger::get_promise_state
pub trait DataShape {
    /// Whether the data counts as a non-empty result.
    fn has_content(&self) -> bool;
}

impl DataShape for Value {
    fn has_content(&self) -> bool {
        is_truthy(self) && (is_valid_array(self) || !is_empty_object(self))
    }
}

impl DataShape for Map<String, Value> {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl DataShape for String {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> DataShape for Vec<T> {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> DataShape for BTreeMap<K, V> {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S: BuildHasher> DataShape for HashMap<K, V, S> {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: DataShape> DataShape for Option<T> {
    fn has_content(&self) -> bool {
        self.as_ref().is_some_and(|inner| inner.has_content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_array_requires_elements() {
        assert!(is_valid_array(&json!([1])));
        assert!(!is_valid_array(&json!([])));
        assert!(!is_valid_array(&json!({"a": 1})));
    }

    #[test]
    fn empty_object_counts_keys() {
        assert!(is_empty_object(&json!({})));
        assert!(!is_empty_object(&json!({"a": null})));
        assert!(is_empty_object(&json!(42)));
        assert!(!is_empty_object(&json!("abc")));
    }

    #[test]
    fn defined_not_null() {
        assert!(is_defined_not_null(Some(&json!(0))));
        assert!(is_defined_not_null(Some(&json!(false))));
        assert!(!is_defined_not_null(Some(&Value::Null)));
        assert!(!is_defined_not_null(None));
    }

    #[test]
    fn value_content() {
        assert!(json!([0]).has_content());
        assert!(json!({"x": 1}).has_content());
        assert!(json!("text").has_content());

        assert!(!json!([]).has_content());
        assert!(!json!({}).has_content());
        assert!(!json!("").has_content());
        assert!(!json!(7).has_content());
        assert!(!json!(true).has_content());
        assert!(!Value::Null.has_content());
    }

    #[test]
    fn collection_content() {
        assert!(vec![1].has_content());
        assert!(!Vec::<u8>::new().has_content());
        assert!(!String::new().has_content());

        let mut map: HashMap<&str, i32> = HashMap::new();
        assert!(!map.has_content());
        map.insert("k", 1);
        assert!(map.has_content());
    }

    #[test]
    fn option_content() {
        assert!(Some(vec![1]).has_content());
        assert!(!Some(Vec::<u8>::new()).has_content());
        assert!(!None::<Vec<u8>>.has_content());
    }
}
