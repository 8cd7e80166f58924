//! Get command

use serde_json::Value;

use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};

use super::resolve_config;

/// Print the value stored at a dotted key.
///
/// Strings are printed raw, other values as compact JSON.
pub fn run_get(key: &str, args: &ConfigArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let value = config
        .get(key)
        .ok_or_else(|| CliError::user(format!("Key '{}' not found", key)))?;

    match value {
        Value::String(s) => println!("{}", s),
        other => println!("{}", other),
    }
    Ok(())
}
