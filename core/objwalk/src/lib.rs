//! Deep object traversal.
//!
//! A small family of operations over [`Value`] trees, all driven by the same
//! key selection and recursion rules:
//!
//! - [`map`] — rebuild an object entry by entry; callback results are
//!   assigned as pairs or merged as fragments
//! - [`filter_by`] / [`partition`] — keep entries accepted by a predicate,
//!   optionally collecting the rejected ones in a parallel "rest" object
//! - [`find_key`] — first key whose value passes a predicate
//! - [`extend`], [`clear`], [`pop`] — in-place mutators
//!
//! Every traversal is synchronous and never modifies its input. Nested plain
//! objects are only entered when [`TraversalOptions::deep`] is set.
//!
//! ```
//! use objwalk::{map, TraversalOptions, Value};
//! use serde_json::json;
//!
//! let input = Value::from(json!({"a": 1, "b": 2}));
//! let doubled = map(&input, &TraversalOptions::new(), |key, value| {
//!     (key.to_owned(), value.as_f64().map(|n| n * 2.0))
//! })
//! .unwrap();
//! assert_eq!(doubled.to_json(), json!({"a": 2, "b": 4}));
//! ```

mod engine;
mod filter;
mod find;
mod map;
mod mutate;
mod options;

pub use engine::{traverse, Accumulator, Entry, Fold};
pub use filter::{filter, filter_by, is_defined, partition, try_filter_by, Partition, Selection};
pub use find::{find_key, find_key_by, has_present_value, try_find_key_by};
pub use map::{map, try_map, Emit};
pub use mutate::{clear, extend, extended, pop};
pub use options::{ExtendOptions, TraversalOptions};

pub use objwalk_merge::{deep_copy, deep_equal, merge_into};
pub use objwalk_types::{Error, KeySelection, Kind, Object, Property, Result, Value};
