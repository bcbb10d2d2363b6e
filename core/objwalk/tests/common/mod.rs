//! Shared fixtures for traversal tests.

#![allow(dead_code)]

use objwalk::{Object, Property, Value};
use serde_json::json;
use std::sync::Arc;

/// Converts a JSON object literal into an [`Object`].
pub fn object(json: serde_json::Value) -> Object {
    match Value::from(json) {
        Value::Object(o) => o,
        other => panic!("expected object fixture, got {other:?}"),
    }
}

/// Converts a JSON literal into a [`Value`].
pub fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Builds an object from pairs, allowing values JSON cannot express.
pub fn object_of(pairs: Vec<(&str, Value)>) -> Object {
    pairs.into_iter().collect()
}

/// An instance `{own: 2}` whose prototype holds `{inherited: 1}` and a
/// hidden `secret`.
pub fn instance() -> Object {
    let mut proto = object(json!({"inherited": 1}));
    proto
        .define("secret", Property::hidden("s"))
        .expect("fresh prototype accepts definitions");
    let mut inst = Object::with_prototype(Arc::new(proto));
    inst.set("own", 2).expect("fresh instance accepts writes");
    inst
}

/// Error type for fallible callbacks.
#[derive(Debug)]
pub enum CallbackError {
    Walk(objwalk::Error),
    Rejected(String),
}

impl From<objwalk::Error> for CallbackError {
    fn from(err: objwalk::Error) -> Self {
        CallbackError::Walk(err)
    }
}
