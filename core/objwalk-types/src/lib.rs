//! Value model for objwalk.
//!
//! This crate defines the types every traversal operates on:
//! - [`Value`] — a dynamically typed value (undefined, null, bool, number,
//!   string, array, object)
//! - [`Object`] — an ordered property container with per-property flags,
//!   an optional shared prototype and a frozen bit
//! - [`KeySelection`] — which keys of an object a traversal visits
//!
//! Conversion to and from `serde_json::Value` is provided so callers can
//! build fixtures and read results as plain JSON.

mod keys;
mod object;
mod value;

pub use keys::{is_array_index, select_keys, KeySelection};
pub use object::{Object, Property};
pub use value::{Kind, Value};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading or mutating objects.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot modify frozen object (key `{key}`)")]
    Frozen { key: String },

    #[error("cannot assign to read-only property `{key}`")]
    ReadOnly { key: String },

    #[error("cannot delete or redefine non-configurable property `{key}`")]
    NonConfigurable { key: String },

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
