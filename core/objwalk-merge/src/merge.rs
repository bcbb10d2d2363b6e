use crate::copy::deep_copy;
use crate::equal::deep_equal;
use objwalk_types::{KeySelection, Object, Result, Value};
use tracing::trace;

/// Merges `source` into `target` in place.
///
/// For every enumerable own key of `source`:
/// - object into object recurses
/// - array into array becomes the deduplicated union, target elements first
/// - undefined source values are skipped
/// - anything else overwrites with a deep copy of the source value
///
/// An array landing on a key the target does not hold yet is copied as is,
/// duplicates included.
///
/// Fails if a write hits a frozen object or a read-only property. Keys
/// merged before the failure stay merged.
pub fn merge_into(target: &mut Object, source: &Object) -> Result<()> {
    for key in source.keys(&KeySelection::OwnEnumerable) {
        let Some(src) = source.get_own(&key).map(|p| &p.value) else {
            continue;
        };
        if src.is_undefined() {
            continue;
        }
        match (target.get_own(&key).map(|p| &p.value), src) {
            (Some(Value::Object(_)), Value::Object(nested)) => {
                if let Some(Value::Object(dst)) = target.get_mut(&key)? {
                    merge_into(dst, nested)?;
                }
            }
            (Some(Value::Array(existing)), Value::Array(incoming)) => {
                let merged = union_arrays(existing, incoming);
                trace!(key = %key, len = merged.len(), "merged array values");
                target.set(key, Value::Array(merged))?;
            }
            _ => target.set(key, deep_copy(src))?,
        }
    }
    Ok(())
}

/// Union of two arrays with duplicates removed by [`deep_equal`].
///
/// Keeps first occurrences, `left` before `right`.
#[must_use]
pub fn union_arrays(left: &[Value], right: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(left.len() + right.len());
    for item in left.iter().chain(right) {
        if !out.iter().any(|seen| deep_equal(seen, item)) {
            out.push(deep_copy(item));
        }
    }
    out
}
