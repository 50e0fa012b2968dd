//! Property tests for fact matching.

use proptest::prelude::*;
use serde_json::{json, Value};

use compliance_markup::domain::services::fact_matches;

fn fact_string() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.]{1,12}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A plain string confinement matches exactly the equal fact.
    #[test]
    fn property_string_matches_only_itself(fact in fact_string(), other in fact_string()) {
        prop_assert!(fact_matches(&json!(fact), &json!(fact)));
        prop_assert_eq!(fact_matches(&json!(fact), &json!(other)), fact == other);
    }

    /// PROPERTY: Negation inverts a plain string match.
    #[test]
    fn property_negation_inverts(fact in fact_string(), expected in fact_string()) {
        let plain = fact_matches(&json!(fact), &json!(expected));
        let negated = fact_matches(&json!(fact), &json!(format!("!{}", expected)));
        prop_assert_eq!(negated, !plain);
    }

    /// PROPERTY: An array confinement matches when any element does.
    #[test]
    fn property_array_is_any(fact in fact_string(), options in proptest::collection::vec(fact_string(), 0..5)) {
        let confinement = Value::Array(options.iter().map(|o| json!(o)).collect());
        let expected = options.iter().any(|o| o == &fact);
        prop_assert_eq!(fact_matches(&json!(fact), &confinement), expected);
    }
}
