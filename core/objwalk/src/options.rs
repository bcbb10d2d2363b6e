//! Traversal and extension options.
//!
//! Both option records deserialize from JSON with every field optional, so
//! callers holding configuration as data can build them with
//! [`TraversalOptions::from_json`] and [`ExtendOptions::from_json`].

use objwalk_types::{Error, KeySelection, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options shared by `map`, `filter` and `find_key`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraversalOptions {
    /// Descend into nested plain objects.
    pub deep: bool,
    /// Freeze the result, transitively.
    pub freeze: bool,
    /// Collect rejected entries (filter only).
    pub with_rest: bool,
    /// Keys visited at every level without an override.
    pub key_selection: KeySelection,
    /// Per-depth overrides of `key_selection`; the root is depth 0.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub level_keys: BTreeMap<usize, KeySelection>,
}

impl TraversalOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn deep(mut self) -> Self {
        self.deep = true;
        self
    }

    #[must_use]
    pub fn frozen(mut self) -> Self {
        self.freeze = true;
        self
    }

    #[must_use]
    pub fn with_rest(mut self) -> Self {
        self.with_rest = true;
        self
    }

    #[must_use]
    pub fn keys(mut self, selection: KeySelection) -> Self {
        self.key_selection = selection;
        self
    }

    /// Overrides the key selection for objects at `depth`.
    #[must_use]
    pub fn level(mut self, depth: usize, selection: KeySelection) -> Self {
        self.level_keys.insert(depth, selection);
        self
    }

    /// The key selection in effect at `depth`.
    #[must_use]
    pub fn selection_at(&self, depth: usize) -> &KeySelection {
        self.level_keys.get(&depth).unwrap_or(&self.key_selection)
    }

    /// Parses options from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidOptions(e.to_string()))
    }
}

/// Descriptor flags and behavior for `extend`.
///
/// Every flag defaults to `false`: defined properties are read-only, hidden
/// from enumeration and permanent unless asked otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtendOptions {
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
    /// Freeze the extended object afterwards.
    pub freeze: bool,
    /// Which keys of the source are copied.
    pub key_selection: KeySelection,
}

impl ExtendOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn writable(mut self) -> Self {
        self.writable = true;
        self
    }

    #[must_use]
    pub fn enumerable(mut self) -> Self {
        self.enumerable = true;
        self
    }

    #[must_use]
    pub fn configurable(mut self) -> Self {
        self.configurable = true;
        self
    }

    #[must_use]
    pub fn frozen(mut self) -> Self {
        self.freeze = true;
        self
    }

    #[must_use]
    pub fn keys(mut self, selection: KeySelection) -> Self {
        self.key_selection = selection;
        self
    }

    /// Parses options from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidOptions(e.to_string()))
    }
}
