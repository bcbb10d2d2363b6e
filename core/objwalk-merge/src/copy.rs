use objwalk_types::{Object, Property, Value};

/// Returns a duplicate of `value` that shares no mutable state with it.
///
/// Frozen objects come back unfrozen; prototypes are shared, not copied.
#[must_use]
pub fn deep_copy(value: &Value) -> Value {
    match value {
        Value::Object(o) => Value::Object(deep_copy_object(o)),
        Value::Array(items) => Value::Array(items.iter().map(deep_copy).collect()),
        other => other.clone(),
    }
}

/// [`deep_copy`] for an object, keeping every property's flags.
#[must_use]
pub fn deep_copy_object(obj: &Object) -> Object {
    let props = obj
        .iter()
        .map(|(key, prop)| {
            (
                key.to_owned(),
                Property {
                    value: deep_copy(&prop.value),
                    writable: prop.writable,
                    enumerable: prop.enumerable,
                    configurable: prop.configurable,
                },
            )
        })
        .collect();
    Object::from_parts(props, obj.prototype().cloned())
}
