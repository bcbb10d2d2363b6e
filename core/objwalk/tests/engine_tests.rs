mod common;

use common::value;
use objwalk::{traverse, Entry, Error, Fold, KeySelection, Object, Property, TraversalOptions, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

/// Replaces every leaf with the name of its kind.
#[derive(Default)]
struct KindNames {
    leaves: usize,
}

impl Fold for KindNames {
    type Acc = Object;
    type Error = Error;

    fn entry(&mut self, acc: &mut Object, entry: Entry<'_>) -> Result<(), Error> {
        self.leaves += 1;
        acc.set(entry.key, format!("{:?}", entry.value.kind()))
    }
}

#[test]
fn default_nested_splice_assigns_at_key() {
    let input = value(json!({"a": 1, "n": {"b": "x", "m": {"c": true}}}));
    let mut fold = KindNames::default();
    let out = traverse(&input, &TraversalOptions::new().deep(), &mut fold).unwrap();
    assert_eq!(
        out.to_json(),
        json!({"a": "Number", "n": {"b": "String", "m": {"c": "Boolean"}}})
    );
    assert_eq!(fold.leaves, 3);
}

#[test]
fn shallow_traversal_visits_objects_as_leaves() {
    let input = value(json!({"n": {"b": 1}}));
    let mut fold = KindNames::default();
    let out = traverse(&input, &TraversalOptions::new(), &mut fold).unwrap();
    assert_eq!(out.to_json(), json!({"n": "PlainObject"}));
}

#[test]
fn non_object_input_yields_default_accumulator() {
    let mut fold = KindNames::default();
    let out = traverse(&value(json!([1, 2])), &TraversalOptions::new(), &mut fold).unwrap();
    assert!(out.is_empty());
    assert_eq!(fold.leaves, 0);
}

#[test]
fn level_override_changes_nested_key_selection() {
    let mut nested = Object::new();
    nested.set("shown", 1).unwrap();
    nested.define("hidden", Property::hidden(2)).unwrap();
    let mut root = Object::new();
    root.set("n", nested).unwrap();
    root.define("root_hidden", Property::hidden(3)).unwrap();
    let input = Value::from(root);

    let options = TraversalOptions::new()
        .deep()
        .level(1, KeySelection::OwnAll);
    let out = traverse(&input, &options, &mut KindNames::default()).unwrap();
    assert_eq!(out.to_json(), json!({"n": {"shown": "Number", "hidden": "Number"}}));
}

#[test]
fn freeze_applies_to_empty_result() {
    let out = traverse(
        &Value::Null,
        &TraversalOptions::new().frozen(),
        &mut KindNames::default(),
    )
    .unwrap();
    assert!(out.is_frozen());
}
