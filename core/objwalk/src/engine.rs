//! Recursive traversal engine.
//!
//! [`traverse`] walks the keys chosen by the options' [`KeySelection`],
//! descending into nested objects when `deep` is set, and folds every entry
//! into an accumulator through a [`Fold`] implementation. Entries are folded
//! in key order, so a later entry overwrites an earlier one under the same key.
//!
//! Cyclic objects cannot be built from owned values, so recursion depth is
//! bounded by the nesting depth of the input.

use crate::options::TraversalOptions;
use objwalk_types::{Error, KeySelection, Object, Value};
use tracing::trace;

pub(crate) static UNDEFINED: Value = Value::Undefined;

/// A key/value pair visited during traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<'a> {
    pub key: &'a str,
    pub value: &'a Value,
}

/// Result container built by a traversal.
pub trait Accumulator: Default {
    /// Places a finished nested accumulator at `key`.
    fn assign(&mut self, key: &str, nested: Self) -> objwalk_types::Result<()>;

    /// Makes the accumulator and everything inside it immutable.
    fn freeze(&mut self);
}

impl Accumulator for Object {
    fn assign(&mut self, key: &str, nested: Self) -> objwalk_types::Result<()> {
        self.set(key, nested)
    }

    fn freeze(&mut self) {
        self.freeze_deep();
    }
}

/// Per-entry behavior of a traversal.
pub trait Fold {
    type Acc: Accumulator;
    type Error: From<Error>;

    /// Folds one leaf entry into `acc`.
    fn entry(&mut self, acc: &mut Self::Acc, entry: Entry<'_>) -> Result<(), Self::Error>;

    /// Splices the accumulator of a nested object into `acc`.
    fn nested(&mut self, acc: &mut Self::Acc, key: &str, nested: Self::Acc) -> Result<(), Self::Error> {
        acc.assign(key, nested)?;
        Ok(())
    }
}

/// Runs `fold` over `value`.
///
/// Values that are not objects (including undefined and null) traverse as
/// an empty object. With `options.freeze` the returned accumulator is frozen
/// transitively. The input is never modified.
pub fn traverse<F: Fold>(
    value: &Value,
    options: &TraversalOptions,
    fold: &mut F,
) -> Result<F::Acc, F::Error> {
    let mut acc = match value {
        Value::Object(obj) => walk(obj, options, 0, fold)?,
        _ => F::Acc::default(),
    };
    if options.freeze {
        acc.freeze();
    }
    Ok(acc)
}

fn walk<F: Fold>(
    obj: &Object,
    options: &TraversalOptions,
    depth: usize,
    fold: &mut F,
) -> Result<F::Acc, F::Error> {
    let selection = options.selection_at(depth);
    let mut acc = F::Acc::default();
    for key in obj.keys(selection) {
        let value = obj.get(&key).unwrap_or(&UNDEFINED);
        match value {
            Value::Object(child) if options.deep && descends(child, selection) => {
                trace!(depth, key = %key, "descending into nested object");
                let nested = walk(child, options, depth + 1, fold)?;
                fold.nested(&mut acc, &key, nested)?;
            }
            _ => fold.entry(&mut acc, Entry { key: &key, value })?,
        }
    }
    Ok(acc)
}

/// Deep traversal enters plain objects, and instances only when every key
/// of the chain is being visited.
pub(crate) fn descends(child: &Object, selection: &KeySelection) -> bool {
    child.is_plain() || matches!(selection, KeySelection::InheritedAll)
}
