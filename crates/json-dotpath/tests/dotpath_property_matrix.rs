//! Property checks for resolution and path rendering.

use json_dotpath::{
    format_path, parse_path, resolve, resolve_lenient, resolve_strict, Mode, PathStep,
};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn nest(keys: &[String], leaf: Value) -> Value {
    keys.iter().rev().fold(leaf, |inner, key| {
        let mut map = Map::new();
        map.insert(key.clone(), inner);
        Value::Object(map)
    })
}

fn fixture() -> Value {
    json!({
        "a": {"b": [1, [2, 3], {"c": null}]},
        "x": [[0, 1], [2]],
        "0": "zero"
    })
}

fn path_step() -> impl Strategy<Value = PathStep> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,6}".prop_map(PathStep::Key),
        (0usize..1000).prop_map(PathStep::Index),
    ]
}

proptest! {
    #[test]
    fn field_only_paths_agree_across_modes(
        keys in prop::collection::vec("[a-z_][a-z0-9_ ]{0,6}[a-z]", 1..6),
        leaf in any::<i64>(),
    ) {
        let doc = nest(&keys, json!(leaf));
        let path = keys.join(".");
        let strict = resolve_strict(&doc, &path).unwrap();
        let lenient = resolve_lenient(&doc, &path).unwrap();
        prop_assert_eq!(strict, &json!(leaf));
        prop_assert_eq!(lenient, Some(strict));
    }

    #[test]
    fn resolution_is_repeatable(path in "[ab0c1x.\\[\\],]{0,12}") {
        let doc = fixture();
        let snapshot = doc.clone();
        for mode in [Mode::Strict, Mode::Lenient] {
            let first = resolve(&doc, &path, mode);
            let second = resolve(&doc, &path, mode);
            prop_assert_eq!(first, second);
        }
        prop_assert_eq!(doc, snapshot);
    }

    #[test]
    fn strict_success_implies_lenient_success(path in "[ab0c1x.\\[\\],]{0,12}") {
        let doc = fixture();
        if let Ok(node) = resolve_strict(&doc, &path) {
            prop_assert_eq!(resolve_lenient(&doc, &path).unwrap(), Some(node));
        }
    }

    #[test]
    fn canonical_form_parses_back(steps in prop::collection::vec(path_step(), 0..8)) {
        let text = format_path(&steps);
        prop_assert_eq!(parse_path(&text).unwrap(), steps);
    }
}
