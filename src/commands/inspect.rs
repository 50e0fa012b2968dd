//! Catalog inspection commands

use anyhow::Result;
use serde_json::{json, Value};

use compliance_markup::domain::entities::Mapping;
use compliance_markup::ProjectionMode;

use crate::ui::output::print_value;

use super::Session;

pub fn cmd_profiles(session: &Session, json: bool) -> Result<()> {
    let engine = session.engine()?;
    print_value(&json!(engine.catalog().profile_names()), json)
}

pub fn cmd_dump(session: &Session, json: bool) -> Result<()> {
    let engine = session.engine()?;
    print_value(&engine.catalog().dump(), json)
}

pub fn cmd_params(session: &Session, json: bool) -> Result<()> {
    let mut engine = session.engine()?;
    let assignments = engine.list_puppet_params(session.profiles.as_slice())?;

    let mut out = Mapping::new();
    for (parameter, assignment) in assignments {
        let projected = match session.mode {
            ProjectionMode::Value => assignment.value,
            ProjectionMode::Metadata => assignment.to_value(),
        };
        out.insert(parameter, projected);
    }
    print_value(&Value::Object(out), json)
}
