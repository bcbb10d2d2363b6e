use objwalk_types::{KeySelection, Object, Value};

/// Structural equality.
///
/// Objects are equal when both are plain (or both are instances) and their
/// enumerable own properties match regardless of order. `NaN` equals itself.
#[must_use]
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| deep_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => objects_equal(x, y),
        _ => false,
    }
}

fn objects_equal(a: &Object, b: &Object) -> bool {
    if a.is_plain() != b.is_plain() {
        return false;
    }
    let keys = a.keys(&KeySelection::OwnEnumerable);
    if keys.len() != b.keys(&KeySelection::OwnEnumerable).len() {
        return false;
    }
    keys.iter().all(|key| match (a.get_own(key), b.get_own(key)) {
        (Some(l), Some(r)) => r.enumerable && deep_equal(&l.value, &r.value),
        _ => false,
    })
}
