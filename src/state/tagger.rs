//! Request-state tagging operations.
//!
//! Each operation takes a bag, the name of one entry and the data for the
//! new state, and returns a new bag with that entry replaced. The input bag
//! is left as it was.
//!
//! ```
//! use promise_state::state::{
//!     get_promise_state, set_initial_state, set_loading_state, set_success_state, StateBag,
//! };
//! use serde_json::json;
//!
//! let bag: StateBag = StateBag::new().with_entry("universes", set_initial_state(json!([])));
//! let bag = set_loading_state(&bag, "universes", None);
//! let bag = set_success_state(&bag, "universes", json!([]));
//!
//! // Succeeded, but nothing came back.
//! assert!(get_promise_state(bag.get("universes").unwrap()).is_empty());
//! ```

use serde_json::{Map, Value};

use super::merge::deep_merge;
use super::shape::{is_defined_not_null, DataShape};
use super::{Envelope, PromiseState, StateBag};
use crate::config::TaggerConfig;
use crate::error::{PromiseStateError, Result};

fn set_state<T, E>(
    bag: &StateBag<T, E>,
    key: &str,
    promise_state: PromiseState,
    data: Option<T>,
    error: Option<E>,
) -> StateBag<T, E> {
    tracing::debug!(key, state = %promise_state, "Tagging entry");
    bag.with_entry(key, Envelope::new(promise_state, data, error))
}

/// Seed envelope for an entry no request has touched yet.
pub fn set_initial_state<T, E>(init_value: T) -> Envelope<T, E> {
    Envelope::new(PromiseState::Init, Some(init_value), None)
}

/// Mark `key` as loading, optionally keeping some data visible meanwhile.
pub fn set_loading_state<T, E>(bag: &StateBag<T, E>, key: &str, data: Option<T>) -> StateBag<T, E> {
    set_state(bag, key, PromiseState::Loading, data, None)
}

pub fn set_success_state<T, E>(bag: &StateBag<T, E>, key: &str, data: T) -> StateBag<T, E> {
    set_state(bag, key, PromiseState::Success, Some(data), None)
}

/// Mark `key` as failed with `error`.
///
/// `data` is stored as given, so callers may keep stale data alongside the
/// error.
pub fn set_failure_state<T, E>(
    bag: &StateBag<T, E>,
    key: &str,
    error: E,
    data: Option<T>,
) -> StateBag<T, E> {
    set_state(bag, key, PromiseState::Error, data, Some(error))
}

/// Effective state of an envelope, taking its current data into account.
///
/// Any envelope whose data has content reads as `Success`. A `Success`
/// envelope without content reads as `Empty`. Everything else keeps its
/// stored state.
pub fn get_promise_state<T: DataShape, E>(envelope: &Envelope<T, E>) -> PromiseState {
    if envelope.data.has_content() {
        PromiseState::Success
    } else if envelope.promise_state.is_success() {
        PromiseState::Empty
    } else {
        envelope.promise_state
    }
}

/// Fold a raw response into `bag[key]` using the default [`TaggerConfig`].
///
/// See [`set_promise_response_with`].
pub fn set_promise_response(bag: &StateBag, key: &str, response: &Value) -> Result<StateBag> {
    set_promise_response_with(bag, key, response, &TaggerConfig::default())
}

/// Fold a raw response of the form
/// `{ "payload": { "data": .., "status": .. }, "type": .., ...rest }` into
/// `bag[key]`.
///
/// `payload` and `type` are dropped and every other top-level field is kept
/// on the envelope. A non-success `status`, or a non-null `data.error`,
/// produces an `Error` envelope carrying `data.error`. Otherwise the
/// envelope carries `data`; with `legacy_status_field` set it also gets a
/// `status: "ERROR"` field and keeps whatever `promiseState` the response
/// had (`Init` when none), otherwise it is tagged `Success`.
///
/// # Errors
///
/// Returns `MalformedResponse` when the response is not an object, has no
/// `payload` object, or `payload.data` is missing or null. Returns `Json`
/// when a kept top-level `promiseState` field is not a valid state.
pub fn set_promise_response_with(
    bag: &StateBag,
    key: &str,
    response: &Value,
    config: &TaggerConfig,
) -> Result<StateBag> {
    let fields = response
        .as_object()
        .ok_or_else(|| malformed("response is not an object"))?;
    let payload = fields
        .get("payload")
        .and_then(Value::as_object)
        .ok_or_else(|| malformed("missing payload"))?;
    let data = payload
        .get("data")
        .filter(|data| !data.is_null())
        .ok_or_else(|| malformed("payload.data is missing or null"))?;
    let status_ok = payload
        .get("status")
        .and_then(Value::as_f64)
        .is_some_and(|status| status == f64::from(config.success_status));

    let mut object_state = fields.clone();
    object_state.remove("payload");
    object_state.remove("type");

    let mut overlay = Map::new();
    let error = data.get("error");
    if !status_ok || is_defined_not_null(error) {
        overlay.insert("data".into(), Value::Null);
        if let Some(error) = error {
            overlay.insert("error".into(), error.clone());
        }
        overlay.insert("promiseState".into(), PromiseState::Error.as_str().into());
        tracing::debug!(key, status_ok, "Response tagged as error");
    } else {
        overlay.insert("data".into(), data.clone());
        overlay.insert("error".into(), Value::Null);
        if config.legacy_status_field {
            overlay.insert("status".into(), PromiseState::Error.as_str().into());
        } else {
            overlay.insert("promiseState".into(), PromiseState::Success.as_str().into());
        }
        tracing::debug!(
            key,
            legacy = config.legacy_status_field,
            "Response tagged as success"
        );
    }

    let merged = deep_merge(&Value::Object(object_state), &Value::Object(overlay));
    let envelope: Envelope = serde_json::from_value(merged)?;
    Ok(bag.with_entry(key, envelope))
}

fn malformed(message: &str) -> PromiseStateError {
    PromiseStateError::MalformedResponse {
        message: message.to_string(),
    }
}
