//! Entry-wise transformation.

use crate::engine::{traverse, Entry, Fold};
use crate::options::TraversalOptions;
use objwalk_merge::merge_into;
use objwalk_types::{Error, Object, Result, Value};
use tracing::trace;

/// What a `map` callback produces for one entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Emit {
    /// Nothing is written.
    Drop,
    /// Merged into the result; arrays combine as a deduplicated union.
    Fragment(Object),
    /// Assigned as `result[key] = value`. Dropped if the key is undefined,
    /// null or `false`.
    Pair(Value, Value),
    /// Each pair assigned in order.
    Pairs(Vec<(Value, Value)>),
}

impl Emit {
    #[must_use]
    pub fn pair(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Emit::Pair(key.into(), value.into())
    }
}

/// Classifies a dynamic callback result: falsy values drop, objects merge,
/// an array whose first element is an array is a list of pairs, any other
/// array is a single pair.
impl From<Value> for Emit {
    fn from(value: Value) -> Self {
        if !value.is_truthy() {
            return Emit::Drop;
        }
        match value {
            Value::Object(fragment) => Emit::Fragment(fragment),
            Value::Array(items) if matches!(items.first(), Some(Value::Array(_))) => Emit::Pairs(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::Array(pair) => Some(split_pair(pair)),
                        _ => None,
                    })
                    .collect(),
            ),
            Value::Array(pair) => {
                let (key, value) = split_pair(pair);
                Emit::Pair(key, value)
            }
            _ => Emit::Drop,
        }
    }
}

fn split_pair(pair: Vec<Value>) -> (Value, Value) {
    let mut it = pair.into_iter();
    (it.next().unwrap_or_default(), it.next().unwrap_or_default())
}

impl From<Object> for Emit {
    fn from(fragment: Object) -> Self {
        Emit::Fragment(fragment)
    }
}

impl<K: Into<Value>, V: Into<Value>> From<(K, V)> for Emit {
    fn from((key, value): (K, V)) -> Self {
        Emit::Pair(key.into(), value.into())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<Vec<(K, V)>> for Emit {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Emit::Pairs(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<T: Into<Emit>> From<Option<T>> for Emit {
    fn from(emit: Option<T>) -> Self {
        emit.map_or(Emit::Drop, Into::into)
    }
}

struct MapFold<F> {
    callback: F,
}

impl<F, R, E> Fold for MapFold<F>
where
    F: FnMut(&str, &Value) -> std::result::Result<R, E>,
    R: Into<Emit>,
    E: From<Error>,
{
    type Acc = Object;
    type Error = E;

    fn entry(&mut self, acc: &mut Object, entry: Entry<'_>) -> std::result::Result<(), E> {
        let emit: Emit = (self.callback)(entry.key, entry.value)?.into();
        match emit {
            Emit::Drop => {}
            Emit::Fragment(fragment) => {
                trace!(key = entry.key, "merging fragment");
                merge_into(acc, &fragment)?;
            }
            Emit::Pair(key, value) => assign_pair(acc, key, value)?,
            Emit::Pairs(pairs) => {
                for (key, value) in pairs {
                    assign_pair(acc, key, value)?;
                }
            }
        }
        Ok(())
    }

    fn nested(&mut self, acc: &mut Object, key: &str, nested: Object) -> std::result::Result<(), E> {
        if let Some(Value::Object(existing)) = acc.get_mut(key)? {
            merge_into(existing, &nested)?;
            return Ok(());
        }
        acc.set(key, nested)?;
        Ok(())
    }
}

fn assign_pair(acc: &mut Object, key: Value, value: Value) -> Result<()> {
    match key.to_property_key() {
        Some(key) => acc.set(key, value),
        None => Ok(()),
    }
}

/// Builds a new object from the entries of `value`.
///
/// `callback` runs for every selected entry and returns anything convertible
/// to [`Emit`]. With `options.deep`, nested plain objects are mapped first
/// and their result is merged in at the same key; the callback never sees
/// them. Undefined or null input maps to an empty object.
pub fn map<F, R>(value: &Value, options: &TraversalOptions, mut callback: F) -> Result<Object>
where
    F: FnMut(&str, &Value) -> R,
    R: Into<Emit>,
{
    try_map(value, options, |key, value| Ok::<_, Error>(callback(key, value)))
}

/// [`map`] with a fallible callback. The first error aborts the traversal.
pub fn try_map<F, R, E>(
    value: &Value,
    options: &TraversalOptions,
    callback: F,
) -> std::result::Result<Object, E>
where
    F: FnMut(&str, &Value) -> std::result::Result<R, E>,
    R: Into<Emit>,
    E: From<Error>,
{
    traverse(value, options, &mut MapFold { callback })
}
