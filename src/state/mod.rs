//! Request-state tagging for keyed state bags.
//!
//! This module tags data-fetching lifecycle state onto the entries of a
//! [`StateBag`]. Every entry is an [`Envelope`] holding the data, its
//! [`PromiseState`] and an optional error.

pub mod bag;
pub mod envelope;
pub mod merge;
pub mod shape;
pub mod status;
pub mod tagger;

pub use bag::StateBag;
pub use envelope::Envelope;
pub use merge::deep_merge;
pub use shape::{is_defined_not_null, is_empty_object, is_valid_array, DataShape};
pub use status::PromiseState;
pub use tagger::{
    get_promise_state, set_failure_state, set_initial_state, set_loading_state,
    set_promise_response, set_promise_response_with, set_success_state,
};
