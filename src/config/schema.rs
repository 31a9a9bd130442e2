//! Configuration schema for the response tagger.
//!
//! Maps to the YAML config file accepted by `--config`.

use serde::{Deserialize, Serialize};

/// Controls how raw responses are folded into envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaggerConfig {
    /// `payload.status` value treated as a successful response.
    pub success_status: u16,

    /// Tag successful responses with a `status: "ERROR"` field and leave
    /// `promiseState` alone, as existing consumers expect. When false,
    /// successful responses get `promiseState: "SUCCESS"` instead.
    pub legacy_status_field: bool,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            success_status: 200,
            legacy_status_field: true,
        }
    }
}
