use objwalk::{Error, ExtendOptions, KeySelection, TraversalOptions};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── TraversalOptions ─────────────────────────────────────────────

#[test]
fn defaults_are_shallow_mutable_own_enumerable() {
    let options = TraversalOptions::default();
    assert!(!options.deep);
    assert!(!options.freeze);
    assert!(!options.with_rest);
    assert_eq!(options.key_selection, KeySelection::OwnEnumerable);
    assert!(options.level_keys.is_empty());
}

#[test]
fn builders_set_flags() {
    let options = TraversalOptions::new()
        .deep()
        .frozen()
        .with_rest()
        .keys(KeySelection::OwnAll);
    assert!(options.deep && options.freeze && options.with_rest);
    assert_eq!(options.key_selection, KeySelection::OwnAll);
}

#[test]
fn selection_at_prefers_level_override() {
    let options = TraversalOptions::new()
        .keys(KeySelection::OwnAll)
        .level(2, KeySelection::InheritedAll);
    assert_eq!(options.selection_at(0), &KeySelection::OwnAll);
    assert_eq!(options.selection_at(2), &KeySelection::InheritedAll);
    assert_eq!(options.selection_at(3), &KeySelection::OwnAll);
}

#[test]
fn parses_from_json() {
    let options = TraversalOptions::from_json(
        r#"{"deep": true, "key_selection": "inherited_enumerable", "level_keys": {"1": {"explicit": ["a"]}}}"#,
    )
    .unwrap();
    assert!(options.deep);
    assert!(!options.freeze);
    assert_eq!(options.key_selection, KeySelection::InheritedEnumerable);
    assert_eq!(
        options.selection_at(1),
        &KeySelection::Explicit(vec!["a".into()])
    );
}

#[test]
fn unknown_key_selection_fails_fast() {
    let err = TraversalOptions::from_json(r#"{"key_selection": "bogus_mode"}"#).unwrap_err();
    match err {
        Error::InvalidOptions(message) => assert!(message.contains("bogus_mode")),
        other => panic!("expected InvalidOptions, got {other:?}"),
    }
}

#[test]
fn unknown_field_is_rejected() {
    let err = TraversalOptions::from_json(r#"{"depth": 3}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidOptions(_)));
}

#[test]
fn serializes_without_empty_overrides() {
    let json = serde_json::to_value(TraversalOptions::new().deep()).unwrap();
    assert_eq!(
        json,
        json!({
            "deep": true,
            "freeze": false,
            "with_rest": false,
            "key_selection": "own_enumerable"
        })
    );
}

// ── ExtendOptions ────────────────────────────────────────────────

#[test]
fn extend_defaults_are_all_false() {
    let options = ExtendOptions::default();
    assert!(!options.writable && !options.enumerable && !options.configurable);
    assert!(!options.freeze);
}

#[test]
fn extend_options_parse_from_json() {
    let options = ExtendOptions::from_json(r#"{"enumerable": true, "freeze": true}"#).unwrap();
    assert_eq!(options, ExtendOptions::new().enumerable().frozen());
}
