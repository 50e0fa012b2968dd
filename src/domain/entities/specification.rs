//! Specification and parameter assignment entities
//!
//! A `Specification` is a check that targets a configuration parameter.
//! A `ParameterAssignment` is the merged result for one parameter name.

use serde::Serialize;
use serde_json::Value;

use super::Mapping;
use crate::error::{MarkupError, MarkupResult};

/// The check types that assign a configuration parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecificationKind {
    Puppet,
    PuppetClassParameter,
}

impl SpecificationKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "puppet" => Some(Self::Puppet),
            "puppet-class-parameter" => Some(Self::PuppetClassParameter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Puppet => "puppet",
            Self::PuppetClassParameter => "puppet-class-parameter",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Specification {
    pub check: String,
    pub kind: SpecificationKind,
    pub parameter: String,
    pub value: Value,
    pub controls: Mapping,
    pub ces: Vec<String>,
    pub identifiers: Mapping,
    pub oval_ids: Mapping,
    pub confine: Option<Mapping>,
}

impl Specification {
    /// Interpret a check body.
    ///
    /// Returns `Ok(None)` for checks that do not assign a parameter (wrong
    /// type, no settings, no parameter). A parameter without a value is an
    /// error.
    pub fn from_check(check: &str, body: &Value) -> MarkupResult<Option<Self>> {
        let Some(kind) = body
            .get("type")
            .and_then(Value::as_str)
            .and_then(SpecificationKind::parse)
        else {
            tracing::debug!(check, "skipping check: not a parameter type");
            return Ok(None);
        };

        let Some(settings) = body.get("settings").and_then(Value::as_object) else {
            tracing::debug!(check, "skipping check: no settings");
            return Ok(None);
        };

        let Some(parameter) = settings.get("parameter").and_then(Value::as_str) else {
            tracing::debug!(check, "skipping check: settings have no parameter");
            return Ok(None);
        };

        let value = settings
            .get("value")
            .cloned()
            .ok_or_else(|| MarkupError::MissingCheckValue {
                check: check.to_string(),
                parameter: parameter.to_string(),
            })?;

        Ok(Some(Self {
            check: check.to_string(),
            kind,
            parameter: parameter.to_string(),
            value,
            controls: mapping_field(body, "controls"),
            ces: ce_names(body.get("ces")),
            identifiers: mapping_field(body, "identifiers"),
            oval_ids: mapping_field(body, "oval-ids"),
            confine: body.get("confine").and_then(Value::as_object).cloned(),
        }))
    }
}

fn mapping_field(body: &Value, key: &str) -> Mapping {
    body.get(key)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

fn ce_names(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::Object(map)) => map
            .iter()
            .filter(|(_, enabled)| super::is_truthy(enabled))
            .map(|(name, _)| name.clone())
            .collect(),
        _ => Vec::new(),
    }
}

/// The resolved unit for one parameter, with the controls and identifiers that justify it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterAssignment {
    pub parameter: String,
    pub value: Value,
    pub controls: Mapping,
    pub identifiers: Mapping,
    #[serde(rename = "oval-ids")]
    pub oval_ids: Mapping,
}

impl ParameterAssignment {
    /// Start an assignment from a deep copy of the specification's data
    pub fn from_specification(spec: &Specification) -> Self {
        Self {
            parameter: spec.parameter.clone(),
            value: spec.value.clone(),
            controls: spec.controls.clone(),
            identifiers: spec.identifiers.clone(),
            oval_ids: spec.oval_ids.clone(),
        }
    }

    /// The whole assignment as a document value
    pub fn to_value(&self) -> Value {
        let mut out = Mapping::new();
        out.insert("parameter".into(), Value::String(self.parameter.clone()));
        out.insert("value".into(), self.value.clone());
        out.insert("controls".into(), Value::Object(self.controls.clone()));
        out.insert("identifiers".into(), Value::Object(self.identifiers.clone()));
        out.insert("oval-ids".into(), Value::Object(self.oval_ids.clone()));
        Value::Object(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(body: Value) -> MarkupResult<Option<Specification>> {
        Specification::from_check("chk", &body)
    }

    #[test]
    fn recognizes_class_parameter_check() {
        let spec = check(json!({
            "type": "puppet-class-parameter",
            "settings": {"parameter": "pkg::ensure", "value": "present"},
            "controls": {"nist_800_53:rev4:AC-1": true},
            "ces": ["ce_pkg"],
            "identifiers": {"disa": ["V-1"]},
        }))
        .unwrap()
        .unwrap();

        assert_eq!(spec.kind, SpecificationKind::PuppetClassParameter);
        assert_eq!(spec.parameter, "pkg::ensure");
        assert_eq!(spec.value, json!("present"));
        assert_eq!(spec.ces, vec!["ce_pkg".to_string()]);
        assert!(spec.oval_ids.is_empty());
    }

    #[test]
    fn skips_unknown_type_and_missing_settings() {
        assert!(check(json!({"type": "file", "settings": {"parameter": "a", "value": 1}}))
            .unwrap()
            .is_none());
        assert!(check(json!({"type": "puppet"})).unwrap().is_none());
        assert!(check(json!({"type": "puppet", "settings": {"value": 1}}))
            .unwrap()
            .is_none());
    }

    #[test]
    fn missing_value_is_an_error() {
        let err = check(json!({"type": "puppet", "settings": {"parameter": "p"}})).unwrap_err();
        assert!(matches!(err, MarkupError::MissingCheckValue { .. }));
    }

    #[test]
    fn null_value_is_still_a_value() {
        let spec = check(json!({"type": "puppet", "settings": {"parameter": "p", "value": null}}))
            .unwrap()
            .unwrap();
        assert_eq!(spec.value, Value::Null);
    }

    #[test]
    fn assignment_value_uses_dashed_oval_ids() {
        let spec = check(json!({
            "type": "puppet",
            "settings": {"parameter": "p", "value": 1},
            "oval-ids": {"oval:1": true},
        }))
        .unwrap()
        .unwrap();
        let assignment = ParameterAssignment::from_specification(&spec);
        let value = assignment.to_value();
        assert_eq!(value["oval-ids"]["oval:1"], true);
        assert_eq!(value["parameter"], "p");
        assert_eq!(serde_json::to_value(&assignment).unwrap(), value);
    }
}
