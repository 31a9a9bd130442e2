//! promise-state - Request-state tagging for keyed client-side state bags.
//!
//! A state bag maps entry names to envelopes of the form
//! `{ data, promiseState, error }`. The tagging operations move one entry
//! through the request lifecycle (INIT, LOADING, SUCCESS / ERROR) and return
//! a new bag, leaving the old one untouched.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Tagger configuration loading
//! - [`error`] - Error types and result aliases
//! - [`state`] - Promise states, envelopes, bags and the tagging operations
//!
//! # Example
//!
//! ```
//! use promise_state::state::{get_promise_state, set_promise_response, StateBag};
//! use serde_json::json;
//!
//! let bag = StateBag::new();
//! let response = json!({"payload": {"data": {"error": "bad"}, "status": 200}});
//! let bag = set_promise_response(&bag, "tasks", &response).unwrap();
//!
//! let entry = bag.get("tasks").unwrap();
//! assert_eq!(entry.error, Some(json!("bad")));
//! assert!(get_promise_state(entry).is_error());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod state;

pub use error::{PromiseStateError, Result};
