//! The envelope record stored for each bag entry.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::PromiseState;

/// One async value together with its lifecycle state.
///
/// Serializes as `{ "data", "promiseState", "error", ...extra }`. The
/// `extra` map holds fields copied over from a raw response by
/// [`set_promise_response`](super::set_promise_response); envelopes built by
/// the other tagging operations leave it empty.
///
/// `data` and `error` serialize `None` as `null`, and `null` reads back as
/// `None`. For `Value` envelopes this folds `Some(Value::Null)` into `None`
/// on a JSON round trip; both forms serialize identically and neither has
/// content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T = Value, E = Value> {
    pub data: Option<T>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub promise_state: PromiseState,

    /// Set only for `Error` envelopes.
    pub error: Option<E>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A `null` state reads the same as a missing one.
fn null_as_default<'de, D>(deserializer: D) -> Result<PromiseState, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<PromiseState>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T, E> Envelope<T, E> {
    /// Create an envelope with no extra fields.
    pub fn new(promise_state: PromiseState, data: Option<T>, error: Option<E>) -> Self {
        Self {
            data,
            promise_state,
            error,
            extra: Map::new(),
        }
    }

    /// Look up a field copied from a raw response.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Attach an extra field.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
