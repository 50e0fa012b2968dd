//! Property tests for document and specification merging.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use compliance_markup::domain::services::{combine, knockout_merge};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        (0i64..100).prop_map(|n| json!(n)),
        "[a-z]{1,4}".prop_map(Value::String),
    ]
}

fn key() -> impl Strategy<Value = String> {
    "[a-d]{1,2}"
}

fn mapping() -> impl Strategy<Value = Map<String, Value>> {
    proptest::collection::vec((key(), leaf()), 0..6).prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Sequence combination is a duplicate-free union that keeps existing order first.
    #[test]
    fn property_sequence_union(
        existing in proptest::collection::vec(leaf(), 0..8),
        incoming in proptest::collection::vec(leaf(), 0..8),
    ) {
        let mut merged = Value::Array(existing.clone());
        combine(&mut merged, &Value::Array(incoming.clone())).unwrap();
        let merged = merged.as_array().unwrap().clone();

        for item in existing.iter().chain(incoming.iter()) {
            prop_assert!(merged.contains(item));
        }
        for (i, item) in merged.iter().enumerate() {
            prop_assert!(!merged[..i].contains(item));
        }

        let mut first_seen: Vec<Value> = Vec::new();
        for item in &existing {
            if !first_seen.contains(item) {
                first_seen.push(item.clone());
            }
        }
        prop_assert_eq!(&merged[..first_seen.len()], first_seen.as_slice());
    }

    /// PROPERTY: A knockout key removes its target and never lands in the result.
    #[test]
    fn property_knockout_removes_target(dest in mapping(), incoming in mapping(), victim in key()) {
        let mut merged = Value::Object(dest.clone());
        let mut incoming = incoming;
        incoming.remove(&victim);
        incoming.insert(format!("--{}", victim), json!(true));

        knockout_merge(&mut merged, &Value::Object(incoming.clone()));
        let merged = merged.as_object().unwrap();

        prop_assert!(!merged.contains_key(&victim));
        prop_assert!(merged.keys().all(|k| !k.starts_with("--")));
        for (k, v) in &incoming {
            if !k.starts_with("--") {
                prop_assert_eq!(merged.get(k), Some(v));
            }
        }
        for (k, v) in &dest {
            if k != &victim && !incoming.contains_key(k) {
                prop_assert_eq!(merged.get(k), Some(v));
            }
        }
    }

    /// PROPERTY: Scalars always combine, the incoming value wins.
    #[test]
    fn property_scalar_replaced(existing in leaf(), incoming in leaf()) {
        let mut merged = existing;
        combine(&mut merged, &incoming).unwrap();
        prop_assert_eq!(merged, incoming);
    }
}
