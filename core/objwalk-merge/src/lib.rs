//! Deep merge, copy and equality primitives.
//!
//! - [`merge_into`] — destructive recursive merge where arrays combine as a
//!   deduplicated union
//! - [`deep_copy`] — structurally independent, unfrozen duplicate
//! - [`deep_equal`] — structural equality over enumerable own properties

mod copy;
mod equal;
mod merge;

pub use copy::{deep_copy, deep_copy_object};
pub use equal::deep_equal;
pub use merge::{merge_into, union_arrays};
