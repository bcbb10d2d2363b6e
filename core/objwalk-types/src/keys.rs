//! Key selection.
//!
//! Every level of every key order puts integer-like keys first, ascending,
//! followed by the remaining keys in insertion order.

use crate::object::Object;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which keys of an object a traversal visits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySelection {
    /// Enumerable own keys.
    #[default]
    OwnEnumerable,
    /// All own keys, enumerable or not.
    OwnAll,
    /// Enumerable keys of the object and its prototype chain.
    InheritedEnumerable,
    /// All keys of the object and its prototype chain.
    InheritedAll,
    /// Exactly these keys, whether or not they exist.
    Explicit(Vec<String>),
}

impl KeySelection {
    /// Returns true if this selection walks the prototype chain.
    #[must_use]
    pub fn is_inherited(&self) -> bool {
        matches!(
            self,
            KeySelection::InheritedEnumerable | KeySelection::InheritedAll
        )
    }
}

/// Returns true if `key` is a canonical array index (`0`, `1`, ... `2^32 - 2`).
#[must_use]
pub fn is_array_index(key: &str) -> bool {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return false;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    key.parse::<u32>().is_ok_and(|n| n != u32::MAX)
}

/// Selects the keys of `value`. Non-objects have no keys.
#[must_use]
pub fn select_keys(value: &Value, selection: &KeySelection) -> Vec<String> {
    match value {
        Value::Object(obj) => select_keys_of(obj, selection),
        _ => Vec::new(),
    }
}

pub(crate) fn select_keys_of(obj: &Object, selection: &KeySelection) -> Vec<String> {
    match selection {
        KeySelection::OwnEnumerable => ordered_own_keys(obj, false),
        KeySelection::OwnAll => ordered_own_keys(obj, true),
        KeySelection::InheritedEnumerable => chain_keys(obj, false),
        KeySelection::InheritedAll => chain_keys(obj, true),
        KeySelection::Explicit(keys) => keys.clone(),
    }
}

fn ordered_own_keys(obj: &Object, include_hidden: bool) -> Vec<String> {
    let (mut indices, named): (Vec<&str>, Vec<&str>) = obj
        .iter()
        .filter(|(_, prop)| include_hidden || prop.enumerable)
        .map(|(key, _)| key)
        .partition(|key| is_array_index(key));
    indices.sort_by_key(|key| key.parse::<u32>().unwrap_or(u32::MAX));
    indices
        .into_iter()
        .chain(named)
        .map(str::to_owned)
        .collect()
}

/// Walks from the object up its prototype chain. A key seen at a lower
/// level shadows the same key further up, even when the shadowing property
/// is not enumerable.
fn chain_keys(obj: &Object, include_hidden: bool) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    let mut level = Some(obj);
    while let Some(current) = level {
        for key in ordered_own_keys(current, true) {
            if !seen.insert(key.clone()) {
                continue;
            }
            let visible = include_hidden
                || current.get_own(&key).is_some_and(|prop| prop.enumerable);
            if visible {
                keys.push(key);
            }
        }
        level = current.prototype().map(|p| &**p);
    }
    keys
}
