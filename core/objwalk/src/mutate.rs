//! In-place mutators.

use crate::options::ExtendOptions;
use objwalk_merge::deep_copy_object;
use objwalk_types::{KeySelection, Object, Property, Result, Value};
use tracing::debug;

/// Defines every selected key of `props` on `target` with the descriptor
/// flags from `options`, then freezes `target` if asked. Freezing is
/// shallow: objects nested in `target` stay writable.
///
/// Non-object `props` define nothing. Redefining a non-configurable key or
/// writing to a frozen target fails; keys defined before the failure remain.
pub fn extend<'a>(
    target: &'a mut Object,
    props: &Value,
    options: &ExtendOptions,
) -> Result<&'a mut Object> {
    if let Value::Object(source) = props {
        let keys = source.keys(&options.key_selection);
        let count = keys.len();
        for key in keys {
            let value = source.get(&key).cloned().unwrap_or_default();
            target.define(
                key,
                Property {
                    value,
                    writable: options.writable,
                    enumerable: options.enumerable,
                    configurable: options.configurable,
                },
            )?;
        }
        debug!(count, "defined properties");
    }
    if options.freeze {
        target.freeze();
    }
    Ok(target)
}

/// [`extend`] applied to a deep copy of `target`, leaving it untouched.
///
/// A `target` that is not an object is replaced by a fresh empty object.
/// The copy is owned by the caller alone, so freezing it is transitive.
pub fn extended(target: &Value, props: &Value, options: &ExtendOptions) -> Result<Object> {
    let mut out = match target {
        Value::Object(obj) => deep_copy_object(obj),
        _ => Object::new(),
    };
    extend(&mut out, props, options)?;
    if options.freeze {
        out.freeze_deep();
    }
    Ok(out)
}

/// Deletes every key chosen by `selection` from `value`.
///
/// Inherited keys are skipped since only own properties can be deleted.
/// Undefined or null becomes a fresh empty object; any other non-object is
/// left as is.
pub fn clear<'a>(value: &'a mut Value, selection: &KeySelection) -> Result<&'a mut Value> {
    if matches!(value, Value::Undefined | Value::Null) {
        *value = Value::Object(Object::new());
        return Ok(value);
    }
    if let Value::Object(obj) = value {
        let mut removed = 0usize;
        for key in obj.keys(selection) {
            if obj.remove(&key)?.is_some() {
                removed += 1;
            }
        }
        debug!(removed, "cleared object");
    }
    Ok(value)
}

/// Removes `key` (default: the last enumerable own key) and returns the
/// value it read before removal, or undefined when there is none. A key
/// found only on the prototype is read but stays in place.
pub fn pop(value: &mut Value, key: Option<&str>) -> Result<Value> {
    let Value::Object(obj) = value else {
        return Ok(Value::Undefined);
    };
    let key = match key {
        Some(key) => key.to_owned(),
        None => match obj.keys(&KeySelection::OwnEnumerable).pop() {
            Some(last) => last,
            None => return Ok(Value::Undefined),
        },
    };
    let prior = obj.get(&key).cloned();
    let removed = obj.remove(&key)?;
    debug!(key = %key, own = removed.is_some(), "popped key");
    Ok(prior.unwrap_or_default())
}
