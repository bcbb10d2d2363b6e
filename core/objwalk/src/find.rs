//! Short-circuiting key search.

use crate::engine::{descends, Entry, UNDEFINED};
use crate::options::TraversalOptions;
use objwalk_types::{Object, Value};
use std::convert::Infallible;
use tracing::trace;

/// Default search predicate: the value is neither nullish nor `false`.
/// Zero and the empty string match.
#[must_use]
pub fn has_present_value(entry: Entry<'_>) -> bool {
    entry.value.is_present()
}

/// First key whose value passes [`has_present_value`].
#[must_use]
pub fn find_key(value: &Value, options: &TraversalOptions) -> Option<String> {
    find_key_by(value, options, has_present_value)
}

/// First key accepted by `predicate`, in key-selection order.
///
/// With `options.deep`, a nested plain object is searched in place of its
/// own key, depth first; the search continues with the next sibling when
/// nothing inside matches.
#[must_use]
pub fn find_key_by<P>(value: &Value, options: &TraversalOptions, mut predicate: P) -> Option<String>
where
    P: FnMut(Entry<'_>) -> bool,
{
    match try_find_key_by(value, options, |entry| Ok::<_, Infallible>(predicate(entry))) {
        Ok(found) => found,
        Err(never) => match never {},
    }
}

/// [`find_key_by`] with a fallible predicate.
pub fn try_find_key_by<P, E>(
    value: &Value,
    options: &TraversalOptions,
    mut predicate: P,
) -> Result<Option<String>, E>
where
    P: FnMut(Entry<'_>) -> Result<bool, E>,
{
    match value {
        Value::Object(obj) => search(obj, options, 0, &mut predicate),
        _ => Ok(None),
    }
}

fn search<P, E>(
    obj: &Object,
    options: &TraversalOptions,
    depth: usize,
    predicate: &mut P,
) -> Result<Option<String>, E>
where
    P: FnMut(Entry<'_>) -> Result<bool, E>,
{
    let selection = options.selection_at(depth);
    for key in obj.keys(selection) {
        let value = obj.get(&key).unwrap_or(&UNDEFINED);
        match value {
            Value::Object(child) if options.deep && descends(child, selection) => {
                if let Some(found) = search(child, options, depth + 1, predicate)? {
                    return Ok(Some(found));
                }
            }
            _ => {
                if predicate(Entry { key: &key, value })? {
                    trace!(depth, key = %key, "key found");
                    return Ok(Some(key));
                }
            }
        }
    }
    Ok(None)
}
