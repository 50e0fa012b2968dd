use super::*;
use crate::domain::entities::{ComplianceDocument, ModuleRecord};
use crate::domain::ports::{FactStore, ModuleInventory};
use crate::domain::services::catalog_builder::CatalogBuilder;
use crate::domain::services::confinement::Confinement;
use serde_json::json;

struct NoFacts;

impl FactStore for NoFacts {
    fn fact(&self, _name: &str) -> Option<Value> {
        None
    }
}

struct NoModules;

impl ModuleInventory for NoModules {
    fn modules(&self) -> Vec<ModuleRecord> {
        Vec::new()
    }
}

fn check(parameter: &str, value: Value) -> Value {
    json!({
        "type": "puppet-class-parameter",
        "settings": {"parameter": parameter, "value": value},
    })
}

fn resolve(body: Value, profiles: &[&str]) -> MarkupResult<Assignments> {
    let mut builder = CatalogBuilder::new(Confinement::new(&NoFacts, &NoModules));
    builder
        .import(&ComplianceDocument::new("test", body))
        .unwrap();
    let catalog = builder.finish();
    let index = CheckIndex::build(&catalog)?;
    ParameterResolver::new(&catalog, &index).resolve(profiles)
}

fn two_profiles(first: Value, second: Value) -> Value {
    json!({
        "version": "2.0.0",
        "profiles": {
            "P1": {"checks": {"chk_p1": true}},
            "P2": {"checks": {"chk_p2": true}},
        },
        "checks": {
            "chk_p1": check("x", first),
            "chk_p2": check("x", second),
        },
    })
}

#[test]
fn first_listed_profile_wins_scalar_conflicts() {
    // P2 is processed first, then P1 overwrites it
    let assignments = resolve(two_profiles(json!(1), json!(2)), &["P1", "P2"]).unwrap();
    assert_eq!(assignments["x"].value, json!(1));

    let assignments = resolve(two_profiles(json!(1), json!(2)), &["P2", "P1"]).unwrap();
    assert_eq!(assignments["x"].value, json!(2));
}

#[test]
fn sequences_accumulate_in_processing_order() {
    let assignments = resolve(two_profiles(json!([1, 2]), json!([2, 3])), &["P1", "P2"]).unwrap();
    assert_eq!(assignments["x"].value, json!([2, 3, 1]));

    let assignments = resolve(two_profiles(json!([2, 3]), json!([1, 2])), &["P1", "P2"]).unwrap();
    assert_eq!(assignments["x"].value, json!([1, 2, 3]));
}

#[test]
fn mappings_deep_merge_across_profiles() {
    let assignments = resolve(
        two_profiles(json!({"a": {"b": 2, "c": 3}}), json!({"a": {"b": 1}})),
        &["P1", "P2"],
    )
    .unwrap();
    assert_eq!(assignments["x"].value, json!({"a": {"b": 2, "c": 3}}));
}

#[test]
fn type_mismatch_names_parameter() {
    let err = resolve(two_profiles(json!([1]), json!({"a": 1})), &["P1", "P2"]).unwrap_err();
    match err {
        MarkupError::MergeTypeMismatch {
            parameter,
            field,
            existing,
            incoming,
        } => {
            assert_eq!(parameter, "x");
            assert_eq!(field, "value");
            assert_eq!(existing, "mapping");
            assert_eq!(incoming, "sequence");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reaches_specifications_through_controls_and_ces() {
    let body = json!({
        "version": "2.0.0",
        "profiles": {
            "by_control": {"controls": {"AC-1": true}},
            "by_ce": {"ces": {"ce1": true}},
            "disabled": {"controls": {"AC-1": false}},
        },
        "checks": {
            "c1": {
                "type": "puppet",
                "settings": {"parameter": "p1", "value": "v1"},
                "controls": {"AC-1": true},
            },
            "c2": {
                "type": "puppet",
                "settings": {"parameter": "p2", "value": "v2"},
                "ces": ["ce1"],
            },
        },
        "ce": {"ce1": {}},
    });

    let by_control = resolve(body.clone(), &["by_control"]).unwrap();
    assert_eq!(by_control.keys().collect::<Vec<_>>(), vec!["p1"]);

    let by_ce = resolve(body.clone(), &["by_ce"]).unwrap();
    assert_eq!(by_ce.keys().collect::<Vec<_>>(), vec!["p2"]);

    assert!(resolve(body, &["disabled"]).unwrap().is_empty());
}

#[test]
fn metadata_merges_across_specifications() {
    let body = json!({
        "version": "2.0.0",
        "profiles": {"p": {"checks": {"a": true, "b": true}}},
        "checks": {
            "a": {
                "type": "puppet",
                "settings": {"parameter": "x", "value": [1]},
                "controls": {"AC-1": true},
                "identifiers": {"disa": ["V-1"]},
            },
            "b": {
                "type": "puppet",
                "settings": {"parameter": "x", "value": [2]},
                "controls": {"AC-2": true},
                "oval-ids": {"oval:2": true},
            },
        },
    });
    let assignments = resolve(body, &["p"]).unwrap();
    let x = &assignments["x"];
    assert_eq!(x.value, json!([1, 2]));
    assert_eq!(Value::Object(x.controls.clone()), json!({"AC-1": true, "AC-2": true}));
    assert_eq!(Value::Object(x.identifiers.clone()), json!({"disa": ["V-1"]}));
    assert_eq!(Value::Object(x.oval_ids.clone()), json!({"oval:2": true}));
}

#[test]
fn unknown_profiles_and_empty_results() {
    let assignments = resolve(two_profiles(json!(1), json!(2)), &["nope"]).unwrap();
    assert!(assignments.is_empty());
}

#[test]
fn resolution_does_not_alias_catalog() {
    let mut builder = CatalogBuilder::new(Confinement::new(&NoFacts, &NoModules));
    builder
        .import(&ComplianceDocument::new(
            "test",
            two_profiles(json!([1]), json!([2])),
        ))
        .unwrap();
    let catalog = builder.finish();
    let index = CheckIndex::build(&catalog).unwrap();
    let resolver = ParameterResolver::new(&catalog, &index);

    let mut assignments = resolver.resolve(&["P1", "P2"]).unwrap();
    assignments.get_mut("x").unwrap().value = json!("mutated");

    assert_eq!(catalog.checks()["chk_p1"]["settings"]["value"], json!([1]));
    assert_eq!(resolver.resolve(&["P1", "P2"]).unwrap()["x"].value, json!([2, 1]));
}
