use std::process::ExitCode;

use anyhow::Result;

use crate::ui::output::print_value;

use super::Session;

pub fn cmd_lookup(session: &Session, key: &str, json: bool) -> Result<ExitCode> {
    if session.profiles.is_empty() {
        eprintln!("⚠ No active profiles; set `enforcement` in the config or pass --profile");
    }

    let use_case = session.use_case();
    match use_case.resolve_value(key, &session.host()).into_value() {
        Some(value) => {
            print_value(&value, json)?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("{}: not found", key);
            Ok(ExitCode::from(1))
        }
    }
}
