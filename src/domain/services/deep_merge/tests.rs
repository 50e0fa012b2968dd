use super::*;
use serde_json::json;

fn merged(dest: Value, incoming: Value) -> Value {
    let mut dest = dest;
    knockout_merge(&mut dest, &incoming);
    dest
}

#[test]
fn knockout_removes_existing_key() {
    let result = merged(
        json!({"checks": {"c1": true, "c2": true}}),
        json!({"checks": {"--c1": null}}),
    );
    assert_eq!(result, json!({"checks": {"c2": true}}));
}

#[test]
fn knockout_of_missing_key_is_not_retained() {
    let result = merged(json!({"a": 1}), json!({"--b": 1, "c": {"--d": 1, "e": 2}}));
    assert_eq!(result, json!({"a": 1, "c": {"e": 2}}));
}

#[test]
fn mappings_recurse_and_leaves_overwrite() {
    let result = merged(
        json!({"settings": {"parameter": "p", "value": [1, 2]}, "keep": "x"}),
        json!({"settings": {"value": [3]}}),
    );
    assert_eq!(
        result,
        json!({"settings": {"parameter": "p", "value": [3]}, "keep": "x"})
    );
}

#[test]
fn scalar_over_mapping_overwrites() {
    assert_eq!(merged(json!({"a": {"b": 1}}), json!({"a": false})), json!({"a": false}));
}

#[test]
fn knockout_keeps_sibling_order() {
    let result = merged(json!({"a": 1, "b": 2, "c": 3}), json!({"--a": null}));
    let keys: Vec<&String> = result.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["b", "c"]);
}

#[test]
fn combine_sequences_is_stable_union() {
    let mut existing = json!([1, 2]);
    combine(&mut existing, &json!([2, 3])).unwrap();
    assert_eq!(existing, json!([1, 2, 3]));
}

#[test]
fn combine_sequences_drops_existing_duplicates() {
    let mut existing = json!(["a", "a", "b"]);
    combine(&mut existing, &json!(["b", "c", "c"])).unwrap();
    assert_eq!(existing, json!(["a", "b", "c"]));
}

#[test]
fn combine_mappings_deep_incoming_wins() {
    let mut existing = json!({"a": {"b": 1}});
    combine(&mut existing, &json!({"a": {"b": 2, "c": 3}})).unwrap();
    assert_eq!(existing, json!({"a": {"b": 2, "c": 3}}));
}

#[test]
fn combine_mappings_has_no_knockout() {
    let mut existing = json!({"a": 1});
    combine(&mut existing, &json!({"--a": true})).unwrap();
    assert_eq!(existing, json!({"a": 1, "--a": true}));
}

#[test]
fn combine_scalars_replaces() {
    let mut existing = json!(1);
    combine(&mut existing, &json!("two")).unwrap();
    assert_eq!(existing, json!("two"));
}

#[test]
fn combine_container_mismatch_is_reported() {
    let mut existing = json!({"a": 1});
    let err = combine(&mut existing, &json!([1])).unwrap_err();
    assert_eq!(
        err,
        Mismatch {
            existing: "mapping",
            incoming: "sequence"
        }
    );

    let mut existing = json!("x");
    assert!(combine(&mut existing, &json!(["x"])).is_err());
}
