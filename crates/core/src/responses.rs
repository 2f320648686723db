//! Checked/unchecked answers for one screening session.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A collected mapping from symptom item id to checked state.
///
/// A `ResponseSet` is produced fresh per evaluation and has no identity
/// across sessions. Keys that are absent read as unchecked, and keys with no
/// matching catalog item are tolerated and ignored during evaluation, so any
/// id → bool map a form hands over is acceptable input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(HashMap<String, bool>);

impl ResponseSet {
    /// Creates an empty response set (everything unchecked).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a response set with the given ids checked.
    pub fn from_checked<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ids.into_iter().map(|id| (id.into(), true)).collect())
    }

    /// Records the checked state for one item id.
    pub fn set(&mut self, id: impl Into<String>, checked: bool) {
        self.0.insert(id.into(), checked);
    }

    /// Reads the checked state for an item id; missing keys are unchecked.
    pub fn checked(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Iterates over every key present in the set, checked or not.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
