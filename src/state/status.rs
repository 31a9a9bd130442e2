//! Promise state enumeration.
//!
//! Every envelope carries exactly one [`PromiseState`] describing where its
//! async value is in the request lifecycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PromiseStateError;

/// Lifecycle state of a data-fetching request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromiseState {
    /// Seeded, no request started yet.
    #[default]
    Init,
    /// Request in flight.
    Loading,
    /// Request resolved with data.
    Success,
    /// Request failed.
    Error,
    /// Request succeeded but the data is empty.
    Empty,
}

impl PromiseState {
    /// All variants in declaration order.
    pub const ALL: [PromiseState; 5] = [
        PromiseState::Init,
        PromiseState::Loading,
        PromiseState::Success,
        PromiseState::Error,
        PromiseState::Empty,
    ];

    pub fn is_init(&self) -> bool {
        matches!(self, PromiseState::Init)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PromiseState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PromiseState::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PromiseState::Error)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PromiseState::Empty)
    }

    /// Upper-case wire name, as used in serialized envelopes.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromiseState::Init => "INIT",
            PromiseState::Loading => "LOADING",
            PromiseState::Success => "SUCCESS",
            PromiseState::Error => "ERROR",
            PromiseState::Empty => "EMPTY",
        }
    }
}

impl fmt::Display for PromiseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromiseState {
    type Err = PromiseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromiseState::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PromiseStateError::InvalidState {
                value: s.to_string(),
            })
    }
}
