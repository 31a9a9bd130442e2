//! Library integration tests.

use promise_state::state::{
    get_promise_state, set_failure_state, set_initial_state, set_loading_state,
    set_promise_response, set_success_state, Envelope, PromiseState, StateBag,
};
use promise_state::PromiseStateError;
use serde_json::json;

fn console_bag() -> StateBag {
    StateBag::new()
        .with_entry("universeList", set_initial_state(json!([])))
        .with_entry("currentCustomer", set_initial_state(json!({})))
}

#[test]
fn error_types_are_public() {
    let err = PromiseStateError::MalformedResponse {
        message: "missing payload".into(),
    };
    assert!(err.to_string().contains("missing payload"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> promise_state::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn full_request_lifecycle() {
    let bag = console_bag();
    assert!(get_promise_state(bag.get("universeList").unwrap()).is_init());

    let bag = set_loading_state(&bag, "universeList", None);
    assert!(get_promise_state(bag.get("universeList").unwrap()).is_loading());

    let bag = set_success_state(&bag, "universeList", json!([{"name": "prod"}]));
    assert!(get_promise_state(bag.get("universeList").unwrap()).is_success());

    let bag = set_failure_state(&bag, "universeList", json!({"message": "forbidden"}), None);
    let entry = bag.get("universeList").unwrap();
    assert!(get_promise_state(entry).is_error());
    assert_eq!(entry.error, Some(json!({"message": "forbidden"})));
}

#[test]
fn success_derives_success_exactly_when_data_is_non_empty() {
    let cases = [
        (json!([1]), true),
        (json!({"k": "v"}), true),
        (json!([]), false),
        (json!({}), false),
    ];
    for (data, non_empty) in cases {
        let bag = set_success_state(&console_bag(), "currentCustomer", data.clone());
        let derived = get_promise_state(bag.get("currentCustomer").unwrap());
        assert_eq!(derived.is_success(), non_empty, "{data}");
        if !non_empty {
            assert_eq!(derived, PromiseState::Empty);
        }
    }
}

#[test]
fn transitions_never_touch_other_entries() {
    let original = console_bag();
    let updated = set_loading_state(&original, "universeList", None);

    assert_eq!(original.get("currentCustomer"), updated.get("currentCustomer"));
    assert_ne!(original, updated);
    assert!(original.get("universeList").unwrap().promise_state.is_init());
}

#[test]
fn legacy_response_success_sets_status_field() {
    let response = json!({"payload": {"data": {"x": 1}, "status": 200}});
    let bag = set_promise_response(&console_bag(), "currentCustomer", &response).unwrap();
    let entry = bag.get("currentCustomer").unwrap();

    assert_eq!(entry.data, Some(json!({"x": 1})));
    assert_eq!(entry.extra("status"), Some(&json!("ERROR")));
    assert_ne!(entry.promise_state, PromiseState::Error);
}

#[test]
fn response_error_field_becomes_failure() {
    let response = json!({"payload": {"data": {"error": "bad"}, "status": 200}});
    let bag = set_promise_response(&console_bag(), "currentCustomer", &response).unwrap();
    let entry = bag.get("currentCustomer").unwrap();

    assert_eq!(entry.error, Some(json!("bad")));
    assert_eq!(entry.promise_state, PromiseState::Error);
}

#[test]
fn response_envelope_serializes_with_extra_fields() {
    let response = json!({
        "type": "FETCH_CUSTOMER_RESPONSE",
        "requestId": "r-42",
        "payload": {"data": {"code": "acme"}, "status": 200}
    });
    let bag = set_promise_response(&console_bag(), "currentCustomer", &response).unwrap();
    let entry: &Envelope = bag.get("currentCustomer").unwrap();

    insta::assert_json_snapshot!(entry, @r#"
    {
      "data": {
        "code": "acme"
      },
      "promiseState": "INIT",
      "error": null,
      "requestId": "r-42",
      "status": "ERROR"
    }
    "#);
}
