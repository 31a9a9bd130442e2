//! Keyed state bag.
//!
//! A [`StateBag`] is never mutated in place. Every update returns a new bag
//! that shares all unchanged envelopes with the bag it was derived from.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Envelope;

/// Immutable mapping from entry names to envelopes.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateBag<T = Value, E = Value> {
    entries: BTreeMap<String, Arc<Envelope<T, E>>>,
}

impl<T, E> StateBag<T, E> {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Get the envelope stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Envelope<T, E>> {
        self.entries.get(key).map(Arc::as_ref)
    }

    /// Get the shared handle for `key`.
    ///
    /// Bags derived from one another hand out the same handle for every
    /// entry that was not replaced.
    pub fn get_shared(&self, key: &str) -> Option<&Arc<Envelope<T, E>>> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Envelope<T, E>)> {
        self.entries
            .iter()
            .map(|(key, envelope)| (key.as_str(), envelope.as_ref()))
    }

    /// Return a copy of this bag with `key` replaced by `envelope`.
    pub fn with_entry(&self, key: impl Into<String>, envelope: Envelope<T, E>) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(key.into(), Arc::new(envelope));
        Self { entries }
    }
}

impl<T, E> Clone for StateBag<T, E> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T, E> Default for StateBag<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E, K: Into<String>> FromIterator<(K, Envelope<T, E>)> for StateBag<T, E> {
    fn from_iter<I: IntoIterator<Item = (K, Envelope<T, E>)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, envelope)| (key.into(), Arc::new(envelope)))
                .collect(),
        }
    }
}
