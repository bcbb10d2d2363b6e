//! Ordered property container.
//!
//! An [`Object`] stores its own properties in insertion order. Each property
//! carries the three descriptor flags (`writable`, `enumerable`,
//! `configurable`). Objects may share a prototype; lookups through [`Object::get`]
//! fall back along the prototype chain.
//!
//! Mutation follows the usual property rules:
//! - a frozen object rejects every write
//! - a non-writable property rejects assignment
//! - a non-configurable property rejects deletion and redefinition

use crate::keys::{select_keys_of, KeySelection};
use crate::value::Value;
use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// A single own property and its descriptor flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub value: Value,
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}

impl Property {
    /// A property as created by plain assignment: all flags set.
    #[must_use]
    pub fn data(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// A property with all flags cleared.
    #[must_use]
    pub fn hidden(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            writable: false,
            enumerable: false,
            configurable: false,
        }
    }
}

/// An ordered collection of named properties.
#[derive(Debug, Clone, Default)]
pub struct Object {
    props: Vec<(String, Property)>,
    proto: Option<Arc<Object>>,
    frozen: bool,
}

impl Object {
    /// Creates a new empty plain object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty object inheriting from `proto`.
    #[must_use]
    pub fn with_prototype(proto: Arc<Object>) -> Self {
        Self {
            props: Vec::new(),
            proto: Some(proto),
            frozen: false,
        }
    }

    /// Builds an unfrozen object from raw parts.
    #[must_use]
    pub fn from_parts(props: Vec<(String, Property)>, proto: Option<Arc<Object>>) -> Self {
        let mut obj = Self {
            props: Vec::with_capacity(props.len()),
            proto,
            frozen: false,
        };
        for (key, prop) in props {
            match obj.position(&key) {
                Some(idx) => obj.props[idx].1 = prop,
                None => obj.props.push((key, prop)),
            }
        }
        obj
    }

    /// Returns the prototype, if any.
    #[must_use]
    pub fn prototype(&self) -> Option<&Arc<Object>> {
        self.proto.as_ref()
    }

    /// Returns true if the object has no prototype.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.proto.is_none()
    }

    /// Number of own properties, enumerable or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.props.iter().position(|(k, _)| k == key)
    }

    /// Returns the own property named `key`.
    #[must_use]
    pub fn get_own(&self, key: &str) -> Option<&Property> {
        self.props.iter().find(|(k, _)| k == key).map(|(_, p)| p)
    }

    /// Returns true if `key` is an own property.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Looks up `key` on the object, then along its prototype chain.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.get_own(key) {
            Some(prop) => Some(&prop.value),
            None => self.proto.as_deref().and_then(|p| p.get(key)),
        }
    }

    /// Mutable access to an own property's value.
    ///
    /// Fails when the object is frozen or the property is read-only.
    pub fn get_mut(&mut self, key: &str) -> Result<Option<&mut Value>> {
        let frozen = self.frozen;
        match self.props.iter_mut().find(|(k, _)| k == key) {
            None => Ok(None),
            Some(_) if frozen => Err(Error::Frozen { key: key.into() }),
            Some((_, prop)) if !prop.writable => Err(Error::ReadOnly { key: key.into() }),
            Some((_, prop)) => Ok(Some(&mut prop.value)),
        }
    }

    /// Assigns `value` to `key`.
    ///
    /// An existing property keeps its flags; a new one is created with all
    /// flags set.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        if self.frozen {
            return Err(Error::Frozen { key });
        }
        match self.position(&key) {
            Some(idx) => {
                let prop = &mut self.props[idx].1;
                if !prop.writable {
                    return Err(Error::ReadOnly { key });
                }
                prop.value = value.into();
            }
            None => self.props.push((key, Property::data(value))),
        }
        Ok(())
    }

    /// Defines (or redefines) an own property with explicit flags.
    pub fn define(&mut self, key: impl Into<String>, prop: Property) -> Result<()> {
        let key = key.into();
        if self.frozen {
            return Err(Error::Frozen { key });
        }
        match self.position(&key) {
            Some(idx) => {
                let existing = &mut self.props[idx].1;
                if !existing.configurable && *existing != prop {
                    return Err(Error::NonConfigurable { key });
                }
                *existing = prop;
            }
            None => self.props.push((key, prop)),
        }
        Ok(())
    }

    /// Deletes an own property, returning its value.
    ///
    /// Deleting a missing key succeeds with `None`.
    pub fn remove(&mut self, key: &str) -> Result<Option<Value>> {
        let Some(idx) = self.position(key) else {
            return Ok(None);
        };
        if self.frozen {
            return Err(Error::Frozen { key: key.into() });
        }
        if !self.props[idx].1.configurable {
            return Err(Error::NonConfigurable { key: key.into() });
        }
        Ok(Some(self.props.remove(idx).1.value))
    }

    /// Prevents any further writes to this object.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Freezes this object and every object reachable through its own
    /// property values, including objects nested in arrays.
    pub fn freeze_deep(&mut self) {
        for (_, prop) in &mut self.props {
            freeze_value(&mut prop.value);
        }
        self.frozen = true;
    }

    /// Iterates own properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.props.iter().map(|(k, p)| (k.as_str(), p))
    }

    /// Consumes the object, yielding its properties and prototype.
    #[must_use]
    pub fn into_parts(self) -> (Vec<(String, Property)>, Option<Arc<Object>>) {
        (self.props, self.proto)
    }

    /// Returns the keys chosen by `selection`.
    #[must_use]
    pub fn keys(&self, selection: &KeySelection) -> Vec<String> {
        select_keys_of(self, selection)
    }

    /// Own enumerable keys with their values.
    pub fn entries(&self) -> impl Iterator<Item = (String, &Value)> {
        self.keys(&KeySelection::OwnEnumerable)
            .into_iter()
            .filter_map(move |k| {
                let value = &self.get_own(&k)?.value;
                Some((k, value))
            })
    }

    /// Converts the enumerable own properties to a JSON object.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries()
            .filter(|(_, v)| !v.is_undefined())
            .map(|(k, v)| (k, v.to_json()))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

fn freeze_value(value: &mut Value) {
    match value {
        Value::Object(o) => o.freeze_deep(),
        Value::Array(items) => items.iter_mut().for_each(freeze_value),
        _ => {}
    }
}

/// Equality compares properties and prototype; the frozen bit is ignored.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.props == other.props && self.proto == other.proto
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Object {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        let props = map
            .into_iter()
            .map(|(k, v)| (k, Property::data(Value::from(v))))
            .collect();
        Self::from_parts(props, None)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let props = iter
            .into_iter()
            .map(|(k, v)| (k.into(), Property::data(v)))
            .collect();
        Self::from_parts(props, None)
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Object {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Object(map) => Ok(Object::from(map)),
            other => Err(serde::de::Error::custom(format!(
                "expected a JSON object, found {other}"
            ))),
        }
    }
}
